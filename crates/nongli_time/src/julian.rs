//! Julian Day ↔ Gregorian calendar conversion with fractional days.
//!
//! Algorithms from Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7.
//! The Gregorian century correction applies from 1582-10-15 onward; earlier
//! day numbers are read as Julian calendar dates.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_CUTOVER_Z: i64 = 2_299_161;

/// Convert a Gregorian calendar date to a Julian Day.
///
/// `day` may carry a fraction: `calendar_to_jd(2000, 1, 1.5)` is J2000.0.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };
    let a = y / 100;
    let b = 2 - a + a / 4;
    (365.25 * (y + 4716) as f64).trunc() + (30.6001 * (m + 1) as f64).trunc() + day + b as f64
        - 1524.5
}

/// Convert a Julian Day to `(year, month, day_with_fraction)`.
///
/// Exact inverse of [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.trunc() as i64;
    let f = jd - z as f64;

    let a = if z < GREGORIAN_CUTOVER_Z {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).trunc() as i64;
        z + 1 + alpha - alpha / 4
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).trunc() as i64;
    let d = (365.25 * c as f64).trunc() as i64;
    let e = ((b - d) as f64 / 30.6001).trunc() as i64;

    let day = (b - d - (30.6001 * e as f64).trunc() as i64) as f64 + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Approximate decimal year used as the ΔT argument.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch, 1957 Oct 4.81
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn meeus_example_7c() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn january_february_shift() {
        let (y, m, d) = jd_to_calendar(calendar_to_jd(1900, 2, 28.0));
        assert_eq!((y, m, d), (1900, 2, 28.0));
        let (y, m, d) = jd_to_calendar(calendar_to_jd(2100, 1, 1.0));
        assert_eq!((y, m, d), (2100, 1, 1.0));
    }

    #[test]
    fn pre_gregorian_reads_julian() {
        // 1582-10-04 (Julian) is the day before the cutover
        let (y, m, d) = jd_to_calendar(2_299_159.5);
        assert_eq!((y, m, d.floor() as u32), (1582, 10, 4));
    }

    #[test]
    fn centuries_and_decimal_year() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
        assert!((julian_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
        assert!((decimal_year(J2000_JD + 365.25 * 25.0) - 2025.0).abs() < 1e-12);
    }
}
