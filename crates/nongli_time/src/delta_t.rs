//! ΔT = TT − UT in seconds.
//!
//! Espenak & Meeus (2006) polynomial expressions, which cover 1900–2150 in
//! seven segments. Outside that span the long-term parabola of Morrison &
//! Stephenson (2004) is used.

use crate::julian::decimal_year;

/// One polynomial segment, valid for `year < end`.
struct Segment {
    end: f64,
    origin: f64,
    /// Ascending powers of `t = year - origin`.
    coeffs: &'static [f64],
}

#[rustfmt::skip]
const SEGMENTS: [Segment; 6] = [
    Segment { end: 1920.0, origin: 1900.0, coeffs: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197] },
    Segment { end: 1941.0, origin: 1920.0, coeffs: &[21.20, 0.84493, -0.076100, 0.0020936] },
    Segment { end: 1961.0, origin: 1950.0, coeffs: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0] },
    Segment { end: 1986.0, origin: 1975.0, coeffs: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0] },
    Segment { end: 2005.0, origin: 2000.0, coeffs: &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599] },
    Segment { end: 2050.0, origin: 2000.0, coeffs: &[62.92, 0.32217, 0.005589] },
];

/// Last year of the 2050 segment; beyond it the plain parabola applies.
const LAST_SEGMENT_END: f64 = 2150.0;

fn horner(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Long-term parabola −20 + 32·u², u = (year − 1820)/100.
fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < SEGMENTS[0].origin {
        return long_term(year);
    }
    if let Some(seg) = SEGMENTS.iter().find(|s| year < s.end) {
        return horner(year - seg.origin, seg.coeffs);
    }
    if year <= LAST_SEGMENT_END {
        // Blends the parabola into the 2050 value.
        return long_term(year) - 0.5628 * (LAST_SEGMENT_END - year);
    }
    long_term(year)
}

/// ΔT in seconds at a Julian Day (either time scale; the difference is
/// far below the model's accuracy).
pub fn delta_t_at_jd(jd: f64) -> f64 {
    delta_t_seconds(decimal_year(jd))
}
