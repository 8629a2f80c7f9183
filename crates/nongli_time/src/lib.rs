//! Civil and astronomical time for the Chinese calendar engine.
//!
//! This crate provides:
//! - Exact integer Gregorian day arithmetic and the validated [`SolarDate`]
//! - Julian Day ↔ calendar conversions with fractional days
//! - The ΔT (TT − UT) model
//! - Projection of TT instants onto Beijing (UTC+8) civil dates and back

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil::{SolarDate, civil_from_days, days_from_civil, days_in_month, is_leap_year};
pub use delta_t::{delta_t_at_jd, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, decimal_year, jd_to_calendar,
    julian_centuries,
};

/// China Standard Time offset from UT, in days.
pub const BEIJING_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// Convert a TT Julian Ephemeris Day to a UT Julian Day.
pub fn tt_to_ut(jde: f64) -> f64 {
    jde - delta_t_at_jd(jde) / SECONDS_PER_DAY
}

/// Convert a UT Julian Day to a TT Julian Ephemeris Day.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_at_jd(jd_ut) / SECONDS_PER_DAY
}

/// Beijing civil date on which the TT instant `jde` falls.
pub fn beijing_date(jde: f64) -> SolarDate {
    let (year, month, day) = jd_to_calendar(tt_to_ut(jde) + BEIJING_OFFSET_DAYS);
    SolarDate::new_unchecked(year, month, day.floor() as u32)
}

/// TT instant of 00:00 Beijing time on `date`.
pub fn beijing_midnight_jde(date: &SolarDate) -> f64 {
    ut_to_tt(date.midnight_jd() - BEIJING_OFFSET_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tt_ut_round_trip() {
        let jde = 2_460_000.25;
        let back = ut_to_tt(tt_to_ut(jde));
        assert!((back - jde).abs() < 1e-8, "drift {}", back - jde);
    }

    #[test]
    fn beijing_date_rolls_at_1600_ut() {
        // 2024-12-31 15:59 UT is still 12-31 in Beijing until 16:00 UT.
        let midnight = beijing_midnight_jde(&SolarDate::new_unchecked(2025, 1, 1));
        assert_eq!(
            beijing_date(midnight + 1e-6),
            SolarDate::new_unchecked(2025, 1, 1)
        );
        assert_eq!(
            beijing_date(midnight - 1e-6),
            SolarDate::new_unchecked(2024, 12, 31)
        );
    }

    #[test]
    fn midnight_is_sixteen_hours_ut_previous_day() {
        let jde = beijing_midnight_jde(&SolarDate::new_unchecked(2000, 1, 1));
        let ut = tt_to_ut(jde);
        // 1999-12-31 16:00 UT
        assert!((ut - (2_451_544.5 - 8.0 / 24.0)).abs() < 1e-8, "got {ut}");
    }
}
