pub use clap::Parser;
use clap::{Args, Subcommand, ValueEnum};

use crate::{error::InvalidRange, rand::Random, randoms::Randoms, string::ALPHANUMERIC};

const DEFAULT_STRING_LENGTH: i64 = 16;

#[derive(Debug, Parser)]
#[command(version, about = "Prints random values and fake data")]
pub struct Cli {
    /// How many values to print, one per line
    #[arg(short = 'n', long, global = true, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Integer between LOWER and UPPER, both inclusive
    Int {
        #[arg(allow_negative_numbers = true)]
        lower: i64,
        #[arg(allow_negative_numbers = true)]
        upper: i64,
    },
    /// Floating point number between LOWER and UPPER
    Float {
        #[arg(allow_negative_numbers = true)]
        lower: f64,
        #[arg(allow_negative_numbers = true)]
        upper: f64,
    },
    /// true or false
    Bool,
    /// String sampled from a set of characters
    String(StringArgs),
    /// Date and time in UTC
    Date {
        /// Pick a time on one of the last N days (today included) instead of any time between
        /// 1970 and 2106
        #[arg(long, value_name = "N")]
        within_days: Option<u32>,
    },
    /// Web address
    Url,
    /// Canned fake data
    Fake { kind: FakeKind },
}

#[derive(Debug, Args)]
pub struct StringArgs {
    /// Exact length [default: 16]
    #[arg(short, long, allow_negative_numbers = true, conflicts_with_all = ["min", "max"])]
    pub length: Option<i64>,

    /// Minimum length, used together with --max
    #[arg(long, allow_negative_numbers = true, requires = "max")]
    pub min: Option<i64>,

    /// Maximum length, used together with --min
    #[arg(long, allow_negative_numbers = true, requires = "min")]
    pub max: Option<i64>,

    /// Characters to draw from
    #[arg(short, long, default_value = ALPHANUMERIC)]
    pub characters: String,
}

impl StringArgs {
    pub fn length_bounds(&self) -> (i64, i64) {
        match (self.length, self.min, self.max) {
            (Some(length), _, _) => (length, length),
            (None, Some(min), Some(max)) => (min, max),
            _ => (DEFAULT_STRING_LENGTH, DEFAULT_STRING_LENGTH),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FakeKind {
    Name,
    Gender,
    Conversation,
    Title,
    Tag,
    HonorificName,
    City,
    Currency,
}

impl Command {
    /// One value rendered for printing
    pub fn generate<R: Random>(&self, randoms: &Randoms<R>) -> Result<String, InvalidRange> {
        Ok(match self {
            Command::Int { lower, upper } => randoms.int(*lower, *upper)?.to_string(),
            Command::Float { lower, upper } => randoms.double(*lower, *upper)?.to_string(),
            Command::Bool => randoms.bool().to_string(),
            Command::String(args) => {
                let (min_length, max_length) = args.length_bounds();
                randoms.string_with_characters_between(&args.characters, min_length, max_length)
            }
            Command::Date { within_days } => {
                let date = match within_days {
                    Some(days) => randoms.date_within_days_before_today(*days),
                    None => randoms.date(),
                };
                date.to_rfc3339()
            }
            Command::Url => randoms.url().to_string(),
            Command::Fake { kind } => match kind {
                FakeKind::Name => randoms.fake_name(),
                FakeKind::Gender => randoms.fake_gender().to_string(),
                FakeKind::Conversation => randoms.fake_conversation().to_string(),
                FakeKind::Title => randoms.fake_title().to_string(),
                FakeKind::Tag => randoms.fake_tag().to_string(),
                FakeKind::HonorificName => randoms.fake_name_with_honorific(),
                FakeKind::City => randoms.fake_city(),
                FakeKind::Currency => randoms.currency().to_string(),
            },
        })
    }
}
