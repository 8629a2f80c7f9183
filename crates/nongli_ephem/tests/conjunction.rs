//! Cross-checks between the independent Sun, Moon and lunation series.

use nongli_ephem::{moon_apparent_longitude, new_moon, sun_apparent_longitude};
use nongli_frames::normalize_to_pm180;

/// Lunations spanning 1900-01 through 2101-01.
const K_RANGE: std::ops::Range<i64> = -1240..1250;

#[test]
fn elongation_vanishes_at_new_moon() {
    for k in K_RANGE {
        let jde = new_moon(k);
        let elong = normalize_to_pm180(moon_apparent_longitude(jde) - sun_apparent_longitude(jde));
        assert!(elong.abs() < 0.25, "k={k} elongation {elong:.4}°");
    }
}

#[test]
fn full_moon_midway_is_opposite() {
    for k in K_RANGE.step_by(13) {
        let mid = 0.5 * (new_moon(k) + new_moon(k + 1));
        let elong = normalize_to_pm180(moon_apparent_longitude(mid) - sun_apparent_longitude(mid));
        assert!(elong.abs() > 160.0, "k={k} elongation {elong:.2}°");
    }
}
