//! Astronomical event solvers and the lunar year compiler.
//!
//! This crate provides:
//! - Solar term instants by Newton iteration on the apparent solar longitude
//! - New-moon searches (on/after, on/before, strictly before an instant or
//!   a Beijing civil date)
//! - The GB/T 33661 lunar year compiler producing month layouts with leap
//!   month placement
//!
//! Everything here is pure and deterministic. Results are meant to be
//! computed once and packed into a table (see `nongli_core`).

pub mod error;
pub mod lunar_year;
pub mod lunar_year_types;
pub mod new_moon;
pub mod solar_term;
pub mod solar_term_types;

pub use error::SearchError;
pub use lunar_year::{
    FIRST_YEAR, LAST_YEAR, compile_lunar_year, compile_solstice_cycle, month_eleven_start,
};
pub use lunar_year_types::{LunarMonthRaw, LunarYearRaw};
pub use new_moon::{
    NewMoon, new_moon_on_or_after, new_moon_on_or_after_date, new_moon_on_or_before,
    new_moon_on_or_before_date, new_moon_strictly_before, new_moon_strictly_before_date,
};
pub use solar_term::{
    solar_longitude_instant, solar_term_date, solar_term_jde, solar_terms_for_year,
};
pub use solar_term_types::{ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent};
