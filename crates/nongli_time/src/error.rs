//! Error types for civil date construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Gregorian date validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a real Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A date string did not match `YYYY-MM-DD`.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid Gregorian date: {year:04}-{month:02}-{day:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
