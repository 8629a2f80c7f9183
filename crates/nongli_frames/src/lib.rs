//! Ecliptic-frame corrections used by the apparent-place series.
//!
//! Provides the low-precision nutation model and degree normalization.

pub mod angle;
pub mod nutation;

pub use angle::{normalize_deg, normalize_to_pm180};
pub use nutation::{Nutation, nutation};
