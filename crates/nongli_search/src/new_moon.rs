//! Bracketing searches over true new-moon instants.
//!
//! Each search starts from the lunation index estimated with the mean
//! synodic month and walks one lunation at a time until the bracket holds.
//! The periodic correction never exceeds ±0.6 day, so the walk is at most
//! one or two steps; [`MAX_WALK`] bounds it regardless.

use nongli_ephem::{lunation_number, new_moon};
use nongli_time::{SolarDate, beijing_midnight_jde};

/// Upper bound on lunation steps in either direction.
const MAX_WALK: usize = 8;
/// Instants closer than this are the same event.
const SAME_INSTANT_DAYS: f64 = 1e-9;

/// A located new moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewMoon {
    /// Lunation index (0 = 2000-01-06).
    pub lunation: i64,
    /// Instant of conjunction, JDE (TT).
    pub jde: f64,
}

impl NewMoon {
    fn at(lunation: i64) -> Self {
        Self {
            lunation,
            jde: new_moon(lunation),
        }
    }
}

/// Latest new moon with instant `<= jde`.
pub fn new_moon_on_or_before(jde: f64) -> NewMoon {
    let mut nm = NewMoon::at(lunation_number(jde).floor() as i64);
    for _ in 0..MAX_WALK {
        if nm.jde <= jde {
            break;
        }
        nm = NewMoon::at(nm.lunation - 1);
    }
    for _ in 0..MAX_WALK {
        let next = NewMoon::at(nm.lunation + 1);
        if next.jde > jde {
            break;
        }
        nm = next;
    }
    nm
}

/// Earliest new moon with instant `>= jde`.
pub fn new_moon_on_or_after(jde: f64) -> NewMoon {
    let mut nm = NewMoon::at(lunation_number(jde).floor() as i64);
    for _ in 0..MAX_WALK {
        if nm.jde >= jde {
            break;
        }
        nm = NewMoon::at(nm.lunation + 1);
    }
    for _ in 0..MAX_WALK {
        let prev = NewMoon::at(nm.lunation - 1);
        if prev.jde < jde {
            break;
        }
        nm = prev;
    }
    nm
}

/// Latest new moon strictly before `jde`.
///
/// A new moon at `jde` itself (within 1e-9 day) is skipped in favour of
/// the previous lunation.
pub fn new_moon_strictly_before(jde: f64) -> NewMoon {
    let nm = new_moon_on_or_before(jde);
    if (nm.jde - jde).abs() < SAME_INSTANT_DAYS {
        NewMoon::at(nm.lunation - 1)
    } else {
        nm
    }
}

/// Earliest new moon at or after 00:00 Beijing time on `date`.
pub fn new_moon_on_or_after_date(date: &SolarDate) -> NewMoon {
    new_moon_on_or_after(beijing_midnight_jde(date))
}

/// Latest new moon at or before 00:00 Beijing time on `date`.
pub fn new_moon_on_or_before_date(date: &SolarDate) -> NewMoon {
    new_moon_on_or_before(beijing_midnight_jde(date))
}

/// Latest new moon strictly before 00:00 Beijing time on `date`.
pub fn new_moon_strictly_before_date(date: &SolarDate) -> NewMoon {
    new_moon_strictly_before(beijing_midnight_jde(date))
}
