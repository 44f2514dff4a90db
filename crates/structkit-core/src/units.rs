//! Unit conversion utilities
//!
//! Room dimensions are entered in feet, placed items are measured in inches and
//! the 3D scene works in meters. Every conversion goes through this module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INCHES_PER_FOOT: f64 = 12.0;
pub const SQ_INCHES_PER_SQ_FOOT: f64 = 144.0;
pub const METERS_PER_INCH: f64 = 0.0254;

/// Linear unit used by a view or report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Inches,
    Feet,
    Meters,
}

impl LengthUnit {
    /// Converts a value in inches into this unit.
    pub fn from_inches(&self, inches: f64) -> f64 {
        match self {
            Self::Inches => inches,
            Self::Feet => inches_to_feet(inches),
            Self::Meters => inches_to_meters(inches),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inches => write!(f, "in"),
            Self::Feet => write!(f, "ft"),
            Self::Meters => write!(f, "m"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            "m" | "meter" | "meters" => Ok(Self::Meters),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

pub fn feet_to_inches(feet: f64) -> f64 {
    feet * INCHES_PER_FOOT
}

pub fn inches_to_feet(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

/// Format a length in inches as `F' I"` (rounded to the nearest inch).
pub fn format_feet_inches(inches: f64) -> String {
    let total = inches.max(0.0).round() as i64;
    let feet = total / 12;
    let rem = total % 12;
    if rem == 0 {
        format!("{}'", feet)
    } else {
        format!("{}' {}\"", feet, rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(feet_to_inches(12.0), 144.0);
        assert_eq!(inches_to_feet(30.0), 2.5);
        assert!((inches_to_meters(100.0) - 2.54).abs() < 1e-9);
        assert_eq!(LengthUnit::Feet.from_inches(24.0), 2.0);
    }

    #[test]
    fn test_format_feet_inches() {
        assert_eq!(format_feet_inches(240.0), "20'");
        assert_eq!(format_feet_inches(150.0), "12' 6\"");
        assert_eq!(format_feet_inches(-5.0), "0'");
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("Feet".parse::<LengthUnit>(), Ok(LengthUnit::Feet));
        assert!("furlong".parse::<LengthUnit>().is_err());
    }
}
