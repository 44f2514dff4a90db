//! # StructKit Core
//!
//! Core units, shared constants and error types for StructKit.
//! Everything here is dependency-light so the designer, take-off and
//! settings crates can all build on it.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{DesignError, Error, Result};
pub use units::{
    feet_to_inches, inches_to_feet, inches_to_meters, format_feet_inches, LengthUnit,
    INCHES_PER_FOOT, METERS_PER_INCH, SQ_INCHES_PER_SQ_FOOT,
};
