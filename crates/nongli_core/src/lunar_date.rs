//! Chinese lunisolar calendar dates.

use std::fmt::{Display, Formatter};

use crate::EngineError;

/// A date in the Chinese calendar.
///
/// Ordering is chronological within the calendar: the regular month sorts
/// before its leap repetition, which sorts before the next month. Field
/// declaration order carries that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    year: i32,
    month: u32,
    is_leap_month: bool,
    day: u32,
}

impl LunarDate {
    /// Build a date with month in 1..=12 and day in 1..=30.
    ///
    /// Whether the month actually has that many days, or whether the year
    /// has that leap month, is checked at conversion time.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidLunarDate("month must be 1-12"));
        }
        if !(1..=30).contains(&day) {
            return Err(EngineError::InvalidLunarDate("day must be 1-30"));
        }
        Ok(Self::new_unchecked(year, month, day, is_leap_month))
    }

    /// Build a date without shape checks. For callers that derived the
    /// fields from a decoded year.
    pub const fn new_unchecked(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            is_leap_month,
            day,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }
}

impl Display for LunarDate {
    /// `YYYY-MM-DD`, with the month prefixed by `L` for a leap month.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "L" } else { "" };
        write!(f, "{:04}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}
