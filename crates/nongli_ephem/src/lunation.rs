//! New-moon instants by lunation index.
//!
//! Lunation `k = 0` is the new moon of 2000-01-06. The corrected instant
//! adds the periodic terms of table 49.A and the planetary arguments of
//! table 49.C to the mean lunation, good to a few seconds over 1900–2100.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 49.

/// Mean new moon of lunation 0, JDE.
const EPOCH_JDE: f64 = 2_451_550.09766;

/// Mean synodic month, days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// `(amplitude in days, [M, M′, F, Ω] multipliers, power of E)`.
#[rustfmt::skip]
const NEW_MOON_TERMS: [(f64, [f64; 4], i32); 25] = [
    (-0.40720, [ 0.0, 1.0,  0.0, 0.0], 0),
    ( 0.17241, [ 1.0, 0.0,  0.0, 0.0], 1),
    ( 0.01608, [ 0.0, 2.0,  0.0, 0.0], 0),
    ( 0.01039, [ 0.0, 0.0,  2.0, 0.0], 0),
    ( 0.00739, [-1.0, 1.0,  0.0, 0.0], 1),
    (-0.00514, [ 1.0, 1.0,  0.0, 0.0], 1),
    ( 0.00208, [ 2.0, 0.0,  0.0, 0.0], 2),
    (-0.00111, [ 0.0, 1.0, -2.0, 0.0], 0),
    (-0.00057, [ 0.0, 1.0,  2.0, 0.0], 0),
    ( 0.00056, [ 1.0, 2.0,  0.0, 0.0], 1),
    (-0.00042, [ 0.0, 3.0,  0.0, 0.0], 0),
    ( 0.00042, [ 1.0, 0.0,  2.0, 0.0], 1),
    ( 0.00038, [ 1.0, 0.0, -2.0, 0.0], 1),
    (-0.00024, [-1.0, 2.0,  0.0, 0.0], 1),
    (-0.00017, [ 0.0, 0.0,  0.0, 1.0], 0),
    (-0.00007, [ 2.0, 1.0,  0.0, 0.0], 0),
    ( 0.00004, [ 0.0, 2.0, -2.0, 0.0], 0),
    ( 0.00004, [ 3.0, 0.0,  0.0, 0.0], 0),
    ( 0.00003, [ 1.0, 1.0, -2.0, 0.0], 0),
    ( 0.00003, [ 0.0, 2.0,  2.0, 0.0], 0),
    (-0.00003, [ 1.0, 1.0,  2.0, 0.0], 0),
    ( 0.00003, [-1.0, 1.0,  2.0, 0.0], 0),
    (-0.00002, [-1.0, 1.0, -2.0, 0.0], 0),
    (-0.00002, [ 1.0, 3.0,  0.0, 0.0], 0),
    ( 0.00002, [ 0.0, 4.0,  0.0, 0.0], 0),
];

/// Planetary arguments `a0 + a1·k` (degrees) and amplitudes (days).
/// A1 also carries −0.009173·t², applied separately.
#[rustfmt::skip]
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (299.77,  0.107408, 0.000325),
    (251.88,  0.016321, 0.000165),
    (251.83, 26.651886, 0.000164),
    (349.42, 36.412478, 0.000126),
    ( 84.66, 18.206239, 0.000110),
    (141.74, 53.303771, 0.000062),
    (207.14,  2.453732, 0.000060),
    (154.84,  7.306860, 0.000056),
    ( 34.52, 27.261239, 0.000047),
    (207.19,  0.121824, 0.000042),
    (291.34,  1.844379, 0.000040),
    (161.72, 24.198154, 0.000037),
    (239.56, 25.513099, 0.000035),
    (331.55,  3.592518, 0.000023),
];

fn wrapped_radians(deg: f64) -> f64 {
    (deg % 360.0).to_radians()
}

/// Mean new moon of lunation `k`, JDE (Meeus eq. 49.1).
pub fn mean_new_moon(k: i64) -> f64 {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    EPOCH_JDE + MEAN_SYNODIC_MONTH * k + 0.00015437 * t2 - 0.000000150 * t3 + 0.00000000073 * t4
}

/// True new moon of lunation `k`, JDE (TT).
pub fn new_moon(k: i64) -> f64 {
    let kf = k as f64;
    let t = kf / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = wrapped_radians(2.5534 + 29.10535669 * kf - 0.0000218 * t2 - 0.00000011 * t3);
    let m_prime = wrapped_radians(
        201.5643 + 385.81693528 * kf + 0.0107438 * t2 + 0.00001239 * t3 - 0.000000058 * t4,
    );
    let f = wrapped_radians(
        160.7108 + 390.67050284 * kf - 0.0016341 * t2 - 0.00000227 * t3 + 0.000000011 * t4,
    );
    let omega = wrapped_radians(124.7746 - 1.56375580 * kf + 0.0020691 * t2 + 0.00000215 * t3);

    let mut jde = mean_new_moon(k);
    for (amp, mult, e_pow) in NEW_MOON_TERMS {
        let arg = mult[0] * m + mult[1] * m_prime + mult[2] * f + mult[3] * omega;
        jde += amp * e.powi(e_pow) * arg.sin();
    }

    for (i, (a0, a1, amp)) in PLANETARY_TERMS.into_iter().enumerate() {
        let mut deg = a0 + a1 * kf;
        if i == 0 {
            deg -= 0.009173 * t2;
        }
        jde += amp * wrapped_radians(deg).sin();
    }
    jde
}

/// Fractional lunation index of `jde`, measured in mean synodic months.
pub fn lunation_number(jde: f64) -> f64 {
    (jde - EPOCH_JDE) / MEAN_SYNODIC_MONTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_49a() {
        // New moon of 1977 February, k = -283: JDE 2443192.65118
        let jde = new_moon(-283);
        assert!((jde - 2_443_192.65118).abs() < 1e-4, "got {jde:.6}");
        let mean = mean_new_moon(-283);
        assert!((mean - 2_443_192.94102).abs() < 1e-4, "mean {mean:.6}");
    }

    #[test]
    fn epoch_lunation_is_zero() {
        assert!(lunation_number(EPOCH_JDE).abs() < 1e-12);
        assert!((lunation_number(EPOCH_JDE + 10.0 * MEAN_SYNODIC_MONTH) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn correction_stays_small() {
        for k in -1400..1400 {
            let d = new_moon(k) - mean_new_moon(k);
            assert!(d.abs() < 0.7, "k={k} correction {d}");
        }
    }

    #[test]
    fn successive_intervals_bounded() {
        for k in -1300..1300 {
            let gap = new_moon(k + 1) - new_moon(k);
            assert!(gap > 29.2 && gap < 29.9, "k={k} gap {gap}");
        }
    }
}
