//! Newton iteration for the instant the Sun reaches a given longitude.

use nongli_ephem::sun_apparent_longitude;
use nongli_frames::normalize_to_pm180;
use nongli_time::{SolarDate, beijing_date};
use tracing::warn;

use crate::error::SearchError;
use crate::solar_term_types::{ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent};

/// Approximate March equinox of 2000, JDE.
const EQUINOX_2000_JDE: f64 = 2_451_623.81;
/// Tropical year, days.
const TROPICAL_YEAR: f64 = 365.2422;
/// Longitudes from here up to 360° fall before the March equinox.
const PRE_EQUINOX_FROM_DEG: f64 = 280.0;
const MAX_ITERATIONS: usize = 50;
const TOLERANCE_DEG: f64 = 1e-7;

/// First guess from mean solar motion since the year's equinox.
fn seed(target_deg: f64, year: i32) -> f64 {
    let equinox = EQUINOX_2000_JDE + TROPICAL_YEAR * (year - 2000) as f64;
    let offset = target_deg / 360.0 * TROPICAL_YEAR;
    if target_deg >= PRE_EQUINOX_FROM_DEG {
        equinox - TROPICAL_YEAR + offset
    } else {
        equinox + offset
    }
}

/// Instant (JDE, TT) in Gregorian year `year` at which the Sun's apparent
/// longitude equals `target_deg`.
///
/// Longitudes of 280° and above resolve to early January (anchored on the
/// previous equinox); the rest resolve to the stretch from March to late
/// December.
pub fn solar_longitude_instant(target_deg: f64, year: i32) -> Result<f64, SearchError> {
    let mut jde = seed(target_deg, year);
    for _ in 0..MAX_ITERATIONS {
        let diff = normalize_to_pm180(target_deg - sun_apparent_longitude(jde));
        if diff.abs() < TOLERANCE_DEG {
            return Ok(jde);
        }
        jde += diff / 360.0 * 365.25;
    }
    warn!(target_deg, year, "solar longitude iteration cap reached");
    Err(SearchError::NoConvergence("solar longitude"))
}

/// Instant (JDE) of `term` in Gregorian year `year`.
pub fn solar_term_jde(term: SolarTerm, year: i32) -> Result<f64, SearchError> {
    solar_longitude_instant(term.longitude_deg(), year)
}

/// Beijing civil date of `term` in Gregorian year `year`.
pub fn solar_term_date(term: SolarTerm, year: i32) -> Result<SolarDate, SearchError> {
    solar_term_jde(term, year).map(beijing_date)
}

/// All 24 terms of Gregorian year `year`, Xiaohan first.
pub fn solar_terms_for_year(year: i32) -> Result<[SolarTermEvent; 24], SearchError> {
    let mut events = [SolarTermEvent {
        term: SolarTerm::Xiaohan,
        jde: 0.0,
        date: SolarDate::new_unchecked(year, 1, 1),
    }; 24];
    for (slot, term) in events.iter_mut().zip(ALL_SOLAR_TERMS) {
        let jde = solar_term_jde(term, year)?;
        *slot = SolarTermEvent {
            term,
            jde,
            date: beijing_date(jde),
        };
    }
    Ok(events)
}
