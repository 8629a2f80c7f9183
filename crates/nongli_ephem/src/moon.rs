//! Lunar apparent longitude from a truncated ELP-2000/82 series.
//!
//! The leading 30 periodic terms of Meeus table 47.A, which keep the error
//! within about 0.1°. The Moon gains that on the Sun in roughly ten
//! minutes, so the series cross-checks new-moon instants, not times them.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47.

use nongli_frames::{normalize_deg, nutation};
use nongli_time::julian_centuries;

/// `(amplitude°, [D, M, M′, F] multipliers, power of E)`.
///
/// Terms that involve the Sun's anomaly M carry E or E² to account for the
/// decreasing eccentricity of Earth's orbit.
#[rustfmt::skip]
const LONGITUDE_TERMS: [(f64, [f64; 4], i32); 30] = [
    ( 6.289, [ 0.0,  0.0,  1.0,  0.0], 0),
    ( 1.274, [ 2.0,  0.0, -1.0,  0.0], 0),
    ( 0.658, [ 2.0,  0.0,  0.0,  0.0], 0),
    ( 0.214, [ 0.0,  0.0,  2.0,  0.0], 0),
    (-0.186, [ 0.0,  1.0,  0.0,  0.0], 1),
    (-0.114, [ 0.0,  0.0,  0.0,  2.0], 0),
    ( 0.059, [ 2.0,  0.0, -2.0,  0.0], 0),
    ( 0.057, [ 2.0, -1.0, -1.0,  0.0], 1),
    ( 0.053, [ 2.0,  0.0,  1.0,  0.0], 0),
    ( 0.046, [ 2.0, -1.0,  0.0,  0.0], 1),
    ( 0.041, [ 0.0,  1.0, -1.0,  0.0], 1),
    (-0.035, [ 1.0,  0.0,  0.0,  0.0], 0),
    (-0.031, [ 0.0,  1.0,  1.0,  0.0], 1),
    (-0.015, [-2.0,  0.0,  0.0,  2.0], 0),
    ( 0.011, [-4.0,  0.0,  1.0,  0.0], 0),
    (-0.009, [ 0.0,  0.0, -1.0,  2.0], 0),
    (-0.008, [ 2.0,  1.0, -1.0,  0.0], 1),
    ( 0.007, [ 2.0,  1.0,  0.0,  0.0], 1),
    (-0.007, [ 0.0,  1.0, -2.0,  0.0], 1),
    (-0.006, [ 2.0, -1.0,  1.0,  0.0], 1),
    ( 0.005, [ 1.0,  0.0,  1.0,  0.0], 0),
    ( 0.005, [ 0.0,  1.0,  2.0,  0.0], 1),
    ( 0.004, [ 2.0, -1.0,  2.0,  0.0], 1),
    ( 0.004, [ 2.0, -2.0, -1.0,  0.0], 2),
    ( 0.003, [-2.0,  0.0,  2.0,  0.0], 0),
    ( 0.003, [ 1.0,  1.0, -1.0,  0.0], 1),
    ( 0.003, [ 0.0,  0.0,  1.0,  2.0], 0),
    ( 0.002, [ 2.0,  0.0,  1.0, -2.0], 0),
    ( 0.002, [ 0.0,  1.0,  2.0,  0.0], 1),
    ( 0.002, [ 2.0,  0.0, -1.0, -2.0], 0),
];

/// Apparent longitude of the Moon in degrees [0, 360) at `jde` (TT).
pub fn moon_apparent_longitude(jde: f64) -> f64 {
    let t = julian_centuries(jde);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude L′ and the four Delaunay-style arguments.
    let l_prime = normalize_deg(
        218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
    );
    let d = normalize_deg(
        297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
    );
    let m = normalize_deg(357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0);
    let m_prime = normalize_deg(
        134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
    );
    let f = normalize_deg(
        93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    );
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let args = [d.to_radians(), m.to_radians(), m_prime.to_radians(), f.to_radians()];
    let mut longitude = l_prime;
    for (amp, mult, e_pow) in LONGITUDE_TERMS {
        let arg = mult[0] * args[0] + mult[1] * args[1] + mult[2] * args[2] + mult[3] * args[3];
        longitude += amp * e.powi(e_pow) * arg.sin();
    }

    normalize_deg(longitude + nutation(t).longitude_deg)
}
