//! Unit-aware text input for station observations.
//!
//! Observations arrive as free text such as `"68F"`, `"1013.25 hPa"` or
//! `"55%"`. Parsing converts them to the canonical station units every
//! evaluator works in:
//!
//! - temperature: degrees Celsius
//! - pressure: Pa (absolute)
//! - elevation: m
//! - relative humidity: fraction (not clamped)

use crate::constants::KELVIN_OFFSET;
use crate::error::{PsyError, PsyResult};
use std::fmt;

/// Quantity family for a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    /// Temperature (canonical: °C)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Elevation above sea level (canonical: m)
    Elevation,
    /// Relative humidity (canonical: fraction, may include %)
    RelativeHumidity,
}

impl Quantity {
    fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::Elevation => "elevation",
            Self::RelativeHumidity => "relative humidity",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Elevation => write!(f, "Elevation"),
            Self::RelativeHumidity => write!(f, "Relative Humidity"),
        }
    }
}

/// Stores a value with its original user input and canonical representation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitValue {
    /// Raw text as the user entered it (e.g., "14.7 psia", "70°F")
    pub raw_text: String,
    /// Canonical value in station units
    pub canonical: f64,
    pub quantity: Quantity,
}

impl UnitValue {
    pub fn from_text(raw_text: impl Into<String>, quantity: Quantity) -> PsyResult<Self> {
        let text = raw_text.into();
        let canonical = parse_quantity(&text, quantity)?;
        Ok(Self {
            raw_text: text,
            canonical,
            quantity,
        })
    }

    pub fn value(&self) -> f64 {
        self.canonical
    }
}

/// Parse a quantity value from user input text.
///
/// A bare number is taken to already be in canonical units.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> PsyResult<f64> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Elevation => parse_elevation(trimmed),
        Quantity::RelativeHumidity => parse_relative_humidity(trimmed),
    }
}

/// Parse temperature in various units, return °C.
fn parse_temperature(input: &str) -> PsyResult<f64> {
    let (value, unit) = split_value_and_unit(input, Quantity::Temperature)?;

    let celsius = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "degc" | "celsius" => value,
        "k" | "kelvin" => value - KELVIN_OFFSET,
        "f" | "°f" | "degf" | "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0 - KELVIN_OFFSET,
        _ => return Err(unknown_unit(&unit, Quantity::Temperature)),
    };

    Ok(celsius)
}

/// Parse pressure in various units, return Pa (absolute).
fn parse_pressure(input: &str) -> PsyResult<f64> {
    let (value, unit) = split_value_and_unit(input, Quantity::Pressure)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "hpa" | "mbar" | "millibar" => value * 100.0,
        "kpa" => value * 1e3,
        "bar" => value * 1e5,
        "atm" => value * 101_325.0,
        "inhg" => value * 3_386.389,
        "mmhg" | "torr" => value * 133.322,
        "psia" => value * 6_894.76,
        _ => return Err(unknown_unit(&unit, Quantity::Pressure)),
    };

    if pa <= 0.0 {
        return Err(PsyError::InvalidArg {
            what: format!("absolute pressure must be positive, got {pa} Pa"),
        });
    }

    Ok(pa)
}

/// Parse elevation, return m.
fn parse_elevation(input: &str) -> PsyResult<f64> {
    let (value, unit) = split_value_and_unit(input, Quantity::Elevation)?;

    let m = match unit.to_lowercase().as_str() {
        "" | "m" => value,
        "km" => value * 1e3,
        "ft" => value * 0.3048,
        _ => return Err(unknown_unit(&unit, Quantity::Elevation)),
    };

    Ok(m)
}

/// Parse relative humidity, accepting a plain fraction or percent.
fn parse_relative_humidity(input: &str) -> PsyResult<f64> {
    let trimmed = input.trim();
    let parse_err = || PsyError::Parse {
        input: input.to_string(),
        quantity: Quantity::RelativeHumidity.name(),
    };

    if let Some(num_str) = trimmed.strip_suffix('%') {
        let percent: f64 = num_str.trim().parse().map_err(|_| parse_err())?;
        Ok(percent / 100.0)
    } else {
        trimmed.parse().map_err(|_| parse_err())
    }
}

fn unknown_unit(unit: &str, quantity: Quantity) -> PsyError {
    PsyError::UnknownUnit {
        unit: unit.to_string(),
        quantity: quantity.name(),
    }
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "1013.25 hPa" -> (1013.25, "hPa")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str, quantity: Quantity) -> PsyResult<(f64, String)> {
    let trimmed = input.trim();

    // Exponent markers only count when followed by a digit or sign.
    let bytes = trimmed.as_bytes();
    let split_idx = trimmed
        .char_indices()
        .find(|&(i, c)| {
            if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' {
                return false;
            }
            if (c == 'e' || c == 'E') && i > 0 {
                let next = bytes.get(i + 1).copied();
                return !matches!(next, Some(b'0'..=b'9' | b'-' | b'+'));
            }
            true
        })
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| PsyError::Parse {
        input: input.to_string(),
        quantity: quantity.name(),
    })?;

    Ok((value, unit_part.trim().to_string()))
}
