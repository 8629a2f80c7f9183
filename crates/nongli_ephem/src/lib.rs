//! Truncated analytic series for the Sun and Moon.
//!
//! This crate provides:
//! - Apparent geocentric ecliptic longitude of the Sun
//! - Apparent geocentric ecliptic longitude of the Moon
//! - Mean and corrected new-moon instants by lunation index
//!
//! All inputs are Julian Ephemeris Days (TT). Every function is pure.

pub mod lunation;
pub mod moon;
pub mod sun;

pub use lunation::{MEAN_SYNODIC_MONTH, lunation_number, mean_new_moon, new_moon};
pub use moon::moon_apparent_longitude;
pub use sun::{SunPosition, sun_apparent_longitude, sun_position};
