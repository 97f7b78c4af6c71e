//! Unit conversion utilities
//!
//! Geometry is always generated in millimeters. These helpers convert
//! lengths for display and parse user input in either metric or imperial
//! notation, including fractional inches such as `1 1/2`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Length unit of a drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters
    #[default]
    Millimeters,
    /// Inches
    Inches,
}

impl Units {
    /// Short label ("mm" or "in")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "in",
        }
    }

    /// Convert a millimeter value into this unit
    pub fn from_mm(&self, value_mm: f64) -> f64 {
        match self {
            Self::Millimeters => value_mm,
            Self::Inches => value_mm / MM_PER_INCH,
        }
    }

    /// Convert a value in this unit into millimeters
    pub fn to_mm(&self, value: f64) -> f64 {
        match self {
            Self::Millimeters => value,
            Self::Inches => value * MM_PER_INCH,
        }
    }

    pub fn measurement_system(&self) -> MeasurementSystem {
        match self {
            Self::Millimeters => MeasurementSystem::Metric,
            Self::Inches => MeasurementSystem::Imperial,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeters" | "metric" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inches),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

/// Measurement system used when parsing free-form length input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `units` - Target unit
pub fn format_length(value_mm: f64, units: Units) -> String {
    format!("{:.3}", units.from_mm(value_mm))
}

/// Parse length string to millimeters
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                if part.contains('/') {
                    let frac_parts: Vec<&str> = part.split('/').collect();
                    if frac_parts.len() != 2 {
                        return Err("Invalid fraction format".to_string());
                    }
                    let num = frac_parts[0]
                        .parse::<f64>()
                        .map_err(|_| "Invalid numerator")?;
                    let den = frac_parts[1]
                        .parse::<f64>()
                        .map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(total_inches * MM_PER_INCH)
        }
    }
}
