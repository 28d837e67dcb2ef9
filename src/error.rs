//! Errors reported by the bounded generators

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Bounds that do not describe a non-empty interval: `upper` below `lower`, an empty half-open
/// range, or a float bound that is NaN or infinite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRange {
    pub lower: String,
    pub upper: String,
}

impl InvalidRange {
    pub fn new(lower: impl Display, upper: impl Display) -> Self {
        InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Invalid range: lower bound {}, upper bound {}", self.lower, self.upper)
    }
}

impl std::error::Error for InvalidRange {}
