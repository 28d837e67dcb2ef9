//! Canned fake data composed from fixed word lists
//!
//! Every list here is a non-empty literal, so sampling from it always yields a value. A `None`
//! from [sample] would be a bug in this module and panics.

use url::Url;

use crate::{bounded::random_bool, rand::Random, sample::sample};

const FIRST_NAMES: &[&str] = &[
    "Henry", "William", "Geoffrey", "Jim", "Yvonne", "Jamie", "Leticia", "Priscilla", "Sidney",
    "Nancy", "Edmund", "Bill", "Megan",
];

const LAST_NAMES: &[&str] = &[
    "Pearson", "Adams", "Cole", "Francis", "Andrews", "Casey", "Gross", "Lane", "Thomas",
    "Patrick", "Strickland", "Nicolas", "Freeman",
];

const CONVERSATIONS: &[&str] = &[
    "You embarrassed me this evening.",
    "You don't think that was just lemonade in your glass, do you?",
    "Do you ever think we should just stop doing this?",
    "Why didn't he come and talk to me himself?",
    "Promise me you'll look after your mother.",
    "If you get me his phone, I might reconsider.",
    "I think the room is bugged.",
    "No! I'm tired of doing what you say.",
    "For some reason, I'm attracted to you.",
];

const TITLES: &[&str] = &[
    "CEO of Google",
    "CEO of Facebook",
    "VP of Marketing @Uber",
    "Business Developer at IBM",
    "Jungler @ Fanatic",
    "B2 Pilot @ USAF",
    "Student at Stanford",
    "Student at Harvard",
    "Mayor of Raccoon City",
    "CTO @ Umbrella Corporation",
    "Professor at Pallet Town University",
];

const TAGS: &[&str] = &[
    "meta", "forum", "troll", "meme", "question", "important", "like4like", "f4f",
];

const HONORIFICS: &[&str] = &["Mr.", "Ms.", "Dr.", "Mrs.", "Mz.", "Mx.", "Prof."];

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port", "mouth",
    "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

const CURRENCIES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "ZAR", "NZD", "INR", "BRL", "CNY", "EGP", "KRW",
    "MXN", "SAR", "SGD",
];

const URLS: &[&str] = &[
    "http://www.google.com",
    "http://leagueoflegends.com/",
    "https://github.com/",
    "http://stackoverflow.com/",
    "https://medium.com/",
    "http://9gag.com/gag/6715049",
    "http://imgur.com/gallery/s9zoqs9",
    "https://www.youtube.com/watch?v=uelHwf8o7_U",
];

fn pick(random: &impl Random, list: &[&'static str]) -> &'static str {
    sample(random, list).expect("fake data lists are never empty")
}

/// First name and last name
pub fn name(random: &impl Random) -> String {
    format!("{} {}", pick(random, FIRST_NAMES), pick(random, LAST_NAMES))
}

pub fn gender(random: &impl Random) -> &'static str {
    if random_bool(random) {
        "Male"
    } else {
        "Female"
    }
}

/// One line of dialogue
pub fn conversation(random: &impl Random) -> &'static str {
    pick(random, CONVERSATIONS)
}

/// Job title
pub fn title(random: &impl Random) -> &'static str {
    pick(random, TITLES)
}

pub fn tag(random: &impl Random) -> &'static str {
    pick(random, TAGS)
}

/// Honorific followed by [name], e.g. `Dr. Nancy Lane`
pub fn name_with_honorific(random: &impl Random) -> String {
    let honorific = pick(random, HONORIFICS);
    format!("{honorific} {}", name(random))
}

/// Prefix and suffix joined without a space, e.g. `Northhaven`
pub fn city(random: &impl Random) -> String {
    format!("{}{}", pick(random, CITY_PREFIXES), pick(random, CITY_SUFFIXES))
}

/// ISO 4217 currency code
pub fn currency(random: &impl Random) -> &'static str {
    pick(random, CURRENCIES)
}

pub fn url(random: &impl Random) -> Url {
    Url::parse(pick(random, URLS)).expect("fake URL list holds only valid URLs")
}
