//! Exact integer Gregorian date arithmetic.
//!
//! Day numbers count whole days from 1970-01-01 and are valid over the
//! entire proleptic Gregorian calendar, negative years included.
//!
//! Source: H. Hinnant, "chrono-Compatible Low-Level Date Algorithms".

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// Offset from 0000-03-01 to 1970-01-01 in days.
const UNIX_EPOCH_DAYS: i64 = 719_468;
/// Days in one 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Gregorian leap-year rule (4/100/400).
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day number (days since 1970-01-01) of a Gregorian date.
///
/// The date is not validated; out-of-range days roll arithmetically.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

/// Gregorian `(year, month, day)` for a day number.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m as u32, d as u32)
}

/// A validated Gregorian calendar date.
///
/// Ordering is chronological: fields compare as (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl SolarDate {
    /// Build a date, rejecting impossible combinations such as Feb 30.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Build a date without validation.
    ///
    /// The caller guarantees `(year, month, day)` is a real Gregorian date,
    /// typically because it came out of [`civil_from_days`] or another
    /// `SolarDate`.
    pub const fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Date for a day number (days since 1970-01-01).
    pub fn from_day_number(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
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

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// The date `days` days later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }

    /// Signed whole days from `self` to `other`.
    pub fn days_until(&self, other: &SolarDate) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Julian Day at 00:00 of this date on the same clock as the caller.
    pub fn midnight_jd(&self) -> f64 {
        crate::julian::calendar_to_jd(self.year, self.month, self.day as f64)
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid year '{}'", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid month '{}'", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid day '{}'", parts[2])))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn negative_offsets() {
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(days_from_civil(-4713, 11, 24)), (-4713, 11, 24));
    }

    #[test]
    fn century_boundaries() {
        assert_eq!(
            days_from_civil(1900, 3, 1) - days_from_civil(1900, 2, 28),
            1
        );
        assert_eq!(
            days_from_civil(2000, 3, 1) - days_from_civil(2000, 2, 28),
            2
        );
    }

    #[test]
    fn rejects_feb_30() {
        assert_eq!(
            SolarDate::new(2024, 2, 30),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
        assert!(SolarDate::new(1900, 2, 29).is_err());
        assert!(SolarDate::new(2000, 2, 29).is_ok());
        assert!(SolarDate::new(2025, 13, 1).is_err());
        assert!(SolarDate::new(2025, 1, 0).is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let a = SolarDate::new_unchecked(2024, 12, 31);
        let b = SolarDate::new_unchecked(2025, 1, 1);
        let c = SolarDate::new_unchecked(2025, 1, 2);
        assert!(a < b && b < c);
    }

    #[test]
    fn add_days_crosses_years() {
        let d = SolarDate::new_unchecked(2024, 12, 30).add_days(3);
        assert_eq!(d, SolarDate::new_unchecked(2025, 1, 2));
        assert_eq!(d.add_days(-3), SolarDate::new_unchecked(2024, 12, 30));
    }

    #[test]
    fn parse_and_display() {
        let d: SolarDate = "2025-01-29".parse().unwrap();
        assert_eq!(d, SolarDate::new_unchecked(2025, 1, 29));
        assert_eq!(d.to_string(), "2025-01-29");
        assert!("2025-02-30".parse::<SolarDate>().is_err());
        assert!("2025/02/01".parse::<SolarDate>().is_err());
    }
}
