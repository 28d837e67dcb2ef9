//! One entry point for every generator in the crate

use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    bounded::{self, BoundedRandom},
    date,
    error::InvalidRange,
    fake,
    rand::{Random, RandomImpl},
    sample::sample,
    string,
};

const DEFAULT_LOWER: i64 = 0;
const DEFAULT_UPPER: i64 = 100;

/// Owns a [Random] source and hands it to the generators.
///
/// [Randoms::new] draws from the process-wide source; tests inject their own with
/// [Randoms::with_random].
#[derive(Clone, Debug)]
pub struct Randoms<R = RandomImpl> {
    random: R,
}

impl Randoms {
    pub fn new() -> Self {
        Randoms { random: RandomImpl }
    }
}

impl Default for Randoms {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Random> Randoms<R> {
    pub fn with_random(random: R) -> Self {
        Randoms { random }
    }

    pub fn bool(&self) -> bool {
        bounded::random_bool(&self.random)
    }

    /// Any [BoundedRandom] type in `[lower, upper]`
    pub fn in_range<T: BoundedRandom>(&self, lower: T, upper: T) -> Result<T, InvalidRange> {
        T::random_in_range(&self.random, lower, upper)
    }

    pub fn int(&self, lower: i64, upper: i64) -> Result<i64, InvalidRange> {
        self.in_range(lower, upper)
    }

    /// `[lower, upper)`
    pub fn int_exclusive(&self, lower: i64, upper: i64) -> Result<i64, InvalidRange> {
        i64::random_in_half_open(&self.random, lower, upper)
    }

    /// `[0, 100]`
    pub fn int_default(&self) -> i64 {
        self.int(DEFAULT_LOWER, DEFAULT_UPPER)
            .expect("default bounds should form a valid range")
    }

    pub fn int32(&self, lower: i32, upper: i32) -> Result<i32, InvalidRange> {
        self.in_range(lower, upper)
    }

    pub fn int32_exclusive(&self, lower: i32, upper: i32) -> Result<i32, InvalidRange> {
        i32::random_in_half_open(&self.random, lower, upper)
    }

    pub fn float(&self, lower: f32, upper: f32) -> Result<f32, InvalidRange> {
        self.in_range(lower, upper)
    }

    /// `[0.0, 100.0]`
    pub fn float_default(&self) -> f32 {
        self.float(DEFAULT_LOWER as f32, DEFAULT_UPPER as f32)
            .expect("default bounds should form a valid range")
    }

    pub fn double(&self, lower: f64, upper: f64) -> Result<f64, InvalidRange> {
        self.in_range(lower, upper)
    }

    /// `[0.0, 100.0]`
    pub fn double_default(&self) -> f64 {
        self.double(DEFAULT_LOWER as f64, DEFAULT_UPPER as f64)
            .expect("default bounds should form a valid range")
    }

    pub fn percentage_is_over(&self, percentage: u32) -> bool {
        bounded::percentage_is_over(&self.random, percentage)
    }

    pub fn string_of_length(&self, length: i64) -> String {
        string::random_string_of_length(&self.random, length)
    }

    pub fn string_between(&self, min_length: i64, max_length: i64) -> String {
        string::random_string_between(&self.random, min_length, max_length)
    }

    pub fn string_with_characters(&self, alphabet: &str, length: i64) -> String {
        string::random_string_with_characters(&self.random, alphabet, length)
    }

    pub fn string_with_characters_between(
        &self,
        alphabet: &str,
        min_length: i64,
        max_length: i64,
    ) -> String {
        string::random_string(&self.random, alphabet, min_length, max_length)
    }

    pub fn item<T: Clone>(&self, items: &[T]) -> Option<T> {
        sample(&self.random, items)
    }

    pub fn date(&self) -> DateTime<Utc> {
        date::random_date(&self.random)
    }

    pub fn date_within_days_before_today(&self, days: u32) -> DateTime<Utc> {
        date::random_date_within_days_before(&self.random, Utc::now().date_naive(), days)
    }

    pub fn url(&self) -> Url {
        fake::url(&self.random)
    }

    pub fn fake_name(&self) -> String {
        fake::name(&self.random)
    }

    pub fn fake_gender(&self) -> &'static str {
        fake::gender(&self.random)
    }

    pub fn fake_conversation(&self) -> &'static str {
        fake::conversation(&self.random)
    }

    pub fn fake_title(&self) -> &'static str {
        fake::title(&self.random)
    }

    pub fn fake_tag(&self) -> &'static str {
        fake::tag(&self.random)
    }

    pub fn fake_name_with_honorific(&self) -> String {
        fake::name_with_honorific(&self.random)
    }

    pub fn fake_city(&self) -> String {
        fake::city(&self.random)
    }

    pub fn currency(&self) -> &'static str {
        fake::currency(&self.random)
    }
}
