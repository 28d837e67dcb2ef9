//! Random points in time

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::{bounded::BoundedRandom, rand::Random};

/// One draw taken as seconds since the Unix epoch, so anywhere from 1970-01-01 to 2106-02-07
pub fn random_date(random: &impl Random) -> DateTime<Utc> {
    DateTime::from_timestamp(random.draw32() as i64, 0)
        .expect("any u32 of seconds should be a valid timestamp")
}

/// A random time of day on a date between `days` days before `today` and `today` itself.
///
/// The window never reaches past [NaiveDate::MIN]; larger `days` are capped there.
pub fn random_date_within_days_before(
    random: &impl Random,
    today: NaiveDate,
    days: u32,
) -> DateTime<Utc> {
    let days_back = draw_up_to(random, days.min(days_since_min(today)));
    let (hour, minute, second) = (
        draw_up_to(random, 23),
        draw_up_to(random, 59),
        draw_up_to(random, 59),
    );
    let date = today
        .checked_sub_days(Days::new(days_back as u64))
        .expect("days back should be capped at NaiveDate::MIN");
    let time = NaiveTime::from_hms_opt(hour, minute, second)
        .expect("drawn hour, minute and second should form a valid time");
    date.and_time(time).and_utc()
}

fn days_since_min(today: NaiveDate) -> u32 {
    u32::try_from((today - NaiveDate::MIN).num_days()).unwrap_or(u32::MAX)
}

fn draw_up_to(random: &impl Random, max: u32) -> u32 {
    u32::random_in_range(random, 0, max).expect("[0, max] should never be empty")
}
