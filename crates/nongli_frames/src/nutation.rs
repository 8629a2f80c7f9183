//! Low-precision nutation (four leading terms).
//!
//! Δψ and Δε from the Moon's node Ω and the mean longitudes of the Sun and
//! Moon. Accurate to about 0.5″ in longitude, which is ample for civil-date
//! resolution of solar terms and new moons.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 22.

/// Nutation in longitude and obliquity, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub longitude_deg: f64,
    pub obliquity_deg: f64,
}

/// Multipliers of (Ω, L☉, L☾), then Δψ sine and Δε cosine amplitudes in arcsec.
#[rustfmt::skip]
const TERMS: [([f64; 3], f64, f64); 4] = [
    ([1.0, 0.0, 0.0], -17.20,  9.20),
    ([0.0, 2.0, 0.0],  -1.32,  0.57),
    ([0.0, 0.0, 2.0],  -0.23,  0.10),
    ([2.0, 0.0, 0.0],   0.21, -0.09),
];

/// Nutation at `t` Julian centuries (TT) since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let node = (125.04452 - 1934.136261 * t).to_radians();
    let sun = (280.4665 + 36000.7698 * t).to_radians();
    let moon = (218.3165 + 481267.8813 * t).to_radians();

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for ([kn, ks, km], s, c) in TERMS {
        let arg = kn * node + ks * sun + km * moon;
        dpsi += s * arg.sin();
        deps += c * arg.cos();
    }

    Nutation {
        longitude_deg: dpsi / 3600.0,
        obliquity_deg: deps / 3600.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000_is_finite() {
        let n = nutation(0.0);
        assert!(n.longitude_deg.is_finite());
        assert!(n.obliquity_deg.is_finite());
    }

    #[test]
    fn typical_amplitude() {
        for i in 0..=400 {
            let t = -1.0 + i as f64 * 0.005;
            let n = nutation(t);
            assert!(n.longitude_deg.abs() * 3600.0 < 19.0, "Δψ at T={t}");
            assert!(n.obliquity_deg.abs() * 3600.0 < 10.0, "Δε at T={t}");
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = -3.788″, Δε = +9.443″ (full theory)
        let t = -0.127_296_372_348;
        let n = nutation(t);
        let (dpsi, deps) = (n.longitude_deg * 3600.0, n.obliquity_deg * 3600.0);
        assert!((dpsi - (-3.788)).abs() < 0.5, "Δψ {dpsi}");
        assert!((deps - 9.443).abs() < 0.2, "Δε {deps}");
    }
}
