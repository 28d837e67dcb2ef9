//! Random values of primitive types (numbers, booleans, strings, dates), uniform sampling from
//! sequences and canned fake data (names, titles, cities, currencies).
//!
//! Every generator is built on a single capability, [Random::draw32]. [RandomImpl] draws from a
//! process-wide generator seeded once from OS entropy; anything else implementing [Random] can be
//! injected instead, which is how the tests make draws deterministic.
//!
//! None of this is suitable for cryptography.

pub use bounded::{percentage_is_over, random_bool, random_in, random_in_exclusive, BoundedRandom};
pub use error::InvalidRange;
pub use crate::rand::{Random, RandomImpl};
pub use randoms::Randoms;
pub use sample::{sample, RandomItem};
pub use string::{
    random_string, random_string_between, random_string_of_length, random_string_with_characters,
    ALPHANUMERIC,
};

pub mod bounded;
pub mod cli;
pub mod date;
mod error;
pub mod fake;
mod rand;
mod randoms;
pub mod sample;
pub mod string;

#[cfg(test)]
mod test_helpers;
