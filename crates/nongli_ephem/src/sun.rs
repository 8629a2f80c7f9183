//! Solar apparent longitude.
//!
//! Geometric mean longitude plus the equation of the center, corrected for
//! nutation and annual aberration. About 0.01° accuracy, i.e. solar-term
//! instants good to well under a minute.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25.

use nongli_frames::{normalize_deg, nutation};
use nongli_time::julian_centuries;

/// Constant of aberration κ, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Geocentric solar coordinates at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// True geometric longitude, degrees, not normalized.
    pub true_longitude_deg: f64,
    /// Apparent longitude, degrees in [0, 360).
    pub apparent_longitude_deg: f64,
    /// Earth–Sun distance, AU.
    pub distance_au: f64,
}

/// Solar coordinates at `jde` (TT).
pub fn sun_position(jde: f64) -> SunPosition {
    let t = julian_centuries(jde);
    let t2 = t * t;

    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t2;
    let m_rad = m.to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();
    let true_longitude_deg = l0 + c;

    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;
    let v_rad = (m + c).to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * v_rad.cos());

    let aberration = -ABERRATION_ARCSEC / (distance_au * 3600.0);
    let apparent_longitude_deg =
        normalize_deg(true_longitude_deg + nutation(t).longitude_deg + aberration);

    SunPosition {
        true_longitude_deg,
        apparent_longitude_deg,
        distance_au,
    }
}

/// Apparent longitude of the Sun in degrees [0, 360).
pub fn sun_apparent_longitude(jde: f64) -> f64 {
    sun_position(jde).apparent_longitude_deg
}
