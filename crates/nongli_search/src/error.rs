//! Error types for the astronomical solvers and the year compiler.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar-term solving or lunar-year compilation.
///
/// None of these is expected inside 1900–2100; each one signals a broken
/// invariant rather than bad user input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Newton iteration hit its cap.
    NoConvergence(&'static str),
    /// A compiled month was not 29 or 30 days long.
    InvalidMonthLength { year: i32, days: i64 },
    /// New-moon walk between two month-11 starts did not close.
    CycleOverrun { year: i32 },
    /// The compiled layout broke a structural rule (month count, numbering).
    InvalidLayout { year: i32, reason: &'static str },
    /// Year outside the range the compiler is validated for.
    OutOfRange(i32),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConvergence(msg) => write!(f, "solver did not converge: {msg}"),
            Self::InvalidMonthLength { year, days } => {
                write!(f, "lunar year {year}: month of {days} days")
            }
            Self::CycleOverrun { year } => {
                write!(f, "lunar year {year}: new-moon cycle did not close")
            }
            Self::InvalidLayout { year, reason } => {
                write!(f, "lunar year {year}: invalid layout: {reason}")
            }
            Self::OutOfRange(year) => write!(f, "year out of range: {year}"),
        }
    }
}

impl Error for SearchError {}
