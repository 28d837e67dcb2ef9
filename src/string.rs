//! Random strings sampled one character at a time from an alphabet

use crate::{bounded::BoundedRandom, rand::Random, sample::sample};

/// Default alphabet: `a-zA-Z0-9`
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Builds a string of `min_length..=max_length` characters, each drawn independently (with
/// replacement) from `alphabet`.
///
/// Returns the empty string when `min_length` is not positive, when `max_length < min_length`, or
/// when `alphabet` is empty. These are results, not errors: callers that pass bad bounds get
/// nothing back rather than a failure.
pub fn random_string(
    random: &impl Random,
    alphabet: &str,
    min_length: i64,
    max_length: i64,
) -> String {
    if min_length <= 0 || max_length < min_length {
        log::debug!("No random string for length bounds {min_length}..={max_length}");
        return String::new();
    }
    let characters: Vec<char> = alphabet.chars().collect();
    if characters.is_empty() {
        log::debug!("No random string for empty alphabet");
        return String::new();
    }

    let length = if min_length < max_length {
        i64::random_in_range(random, min_length, max_length)
            .expect("length bounds should have been validated above")
    } else {
        max_length
    };

    (0..length)
        .map(|_| sample(random, &characters).expect("alphabet should not be empty"))
        .collect()
}

/// Exactly `length` alphanumeric characters
pub fn random_string_of_length(random: &impl Random, length: i64) -> String {
    random_string(random, ALPHANUMERIC, length, length)
}

/// Between `min_length` and `max_length` alphanumeric characters
pub fn random_string_between(random: &impl Random, min_length: i64, max_length: i64) -> String {
    random_string(random, ALPHANUMERIC, min_length, max_length)
}

/// Exactly `length` characters from `alphabet`
pub fn random_string_with_characters(random: &impl Random, alphabet: &str, length: i64) -> String {
    random_string(random, alphabet, length, length)
}
