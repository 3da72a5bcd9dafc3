//! Psychrometric sweeps.
//!
//! Generates chart lines by evaluating the full state across a range of one
//! input with the others held fixed: constant-RH curves (temperature sweep)
//! and constant dry-bulb lines (humidity sweep).

use crate::error::{AirError, AirResult};
use crate::state::PsychroState;
use psy_core::{Quantity, parse_quantity};
use std::fmt;
use tracing::warn;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone)]
pub struct SweepDefinition {
    /// Quantity being swept
    pub quantity: Quantity,
    /// Start value in canonical units
    pub start: f64,
    /// User input for start
    pub start_raw: String,
    /// End value in canonical units
    pub end: f64,
    /// User input for end
    pub end_raw: String,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a sweep from user text inputs.
    pub fn from_text(
        start_raw: impl Into<String>,
        end_raw: impl Into<String>,
        quantity: Quantity,
        num_points: usize,
        sweep_type: SweepType,
    ) -> AirResult<Self> {
        let start_text = start_raw.into();
        let end_text = end_raw.into();

        let start = parse_quantity(&start_text, quantity).map_err(|e| AirError::InvalidArg {
            what: format!("sweep start: {e}"),
        })?;
        let end = parse_quantity(&end_text, quantity).map_err(|e| AirError::InvalidArg {
            what: format!("sweep end: {e}"),
        })?;

        if num_points < 2 {
            return Err(AirError::InvalidArg {
                what: "sweep must have at least 2 points".to_string(),
            });
        }

        if (start - end).abs() < 1e-12 {
            return Err(AirError::InvalidArg {
                what: "sweep start and end must be different".to_string(),
            });
        }

        Ok(SweepDefinition {
            quantity,
            start,
            start_raw: start_text,
            end,
            end_raw: end_text,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Celsius temperatures cross zero; fall back to linear
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.quantity, self.start_raw, self.end_raw, self.num_points, self.sweep_type
        )
    }
}

/// Result of a psychrometric sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Independent variable values (the sweep parameter)
    pub independent_values: Vec<f64>,
    /// Computed states (`None` for failed points)
    pub states: Vec<Option<PsychroState>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    fn collect(independent_values: Vec<f64>, eval: impl Fn(f64) -> AirResult<PsychroState>) -> Self {
        let mut states = Vec::with_capacity(independent_values.len());
        let mut num_successful = 0;
        let mut num_failed = 0;

        for &x in &independent_values {
            match eval(x) {
                Ok(state) => {
                    states.push(Some(state));
                    num_successful += 1;
                }
                Err(e) => {
                    warn!(x, error = %e, "sweep point failed");
                    states.push(None);
                    num_failed += 1;
                }
            }
        }

        Self {
            independent_values,
            states,
            num_successful,
            num_failed,
        }
    }

    fn field(&self, get: impl Fn(&PsychroState) -> f64) -> Vec<f64> {
        self.states.iter().flatten().map(get).collect()
    }

    /// Humidity ratio array (excluding failed points)
    pub fn humidity_ratio(&self) -> Vec<f64> {
        self.field(|s| s.w)
    }

    /// Enthalpy array (excluding failed points)
    pub fn enthalpy_kj_per_kg(&self) -> Vec<f64> {
        self.field(|s| s.h_kj_per_kg)
    }

    /// Wet-bulb array (excluding failed points)
    pub fn wet_bulb_c(&self) -> Vec<f64> {
        self.field(|s| s.t_wb_c)
    }

    /// Independent values corresponding to successful states
    pub fn successful_independent_values(&self) -> Vec<f64> {
        self.independent_values
            .iter()
            .zip(&self.states)
            .filter_map(|(val, state)| state.as_ref().map(|_| *val))
            .collect()
    }
}

/// Sweep dry-bulb temperature at fixed relative humidity and pressure.
pub fn execute_temperature_sweep(
    sweep_def: &SweepDefinition,
    rh: f64,
    p_atm: f64,
) -> AirResult<SweepResult> {
    if sweep_def.quantity != Quantity::Temperature {
        return Err(AirError::InvalidArg {
            what: "sweep definition must be for Temperature quantity".to_string(),
        });
    }

    Ok(SweepResult::collect(sweep_def.generate_points(), |t| {
        PsychroState::from_station(t, rh, p_atm)
    }))
}

/// Sweep relative humidity at fixed dry-bulb temperature and pressure.
pub fn execute_humidity_sweep(
    sweep_def: &SweepDefinition,
    t: f64,
    p_atm: f64,
) -> AirResult<SweepResult> {
    if sweep_def.quantity != Quantity::RelativeHumidity {
        return Err(AirError::InvalidArg {
            what: "sweep definition must be for RelativeHumidity quantity".to_string(),
        });
    }

    Ok(SweepResult::collect(sweep_def.generate_points(), |rh| {
        PsychroState::from_station(t, rh, p_atm)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use psy_core::P_STD_PA;

    fn temperature_sweep(start: f64, end: f64, num_points: usize) -> SweepDefinition {
        SweepDefinition {
            quantity: Quantity::Temperature,
            start,
            start_raw: format!("{start}C"),
            end,
            end_raw: format!("{end}C"),
            num_points,
            sweep_type: SweepType::Linear,
        }
    }

    #[test]
    fn linear_sweep_generation() {
        let points = temperature_sweep(-10.0, 30.0, 5).generate_points();
        assert_eq!(points, vec![-10.0, 0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition {
            quantity: Quantity::Pressure,
            start: 1e4,
            start_raw: "10kPa".to_string(),
            end: 1e5,
            end_raw: "100kPa".to_string(),
            num_points: 3,
            sweep_type: SweepType::Logarithmic,
        };

        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        let expected_mid = (1e4_f64 * 1e5_f64).sqrt();
        assert!((points[1] - expected_mid).abs() / expected_mid < 1e-9);
        assert_eq!(points[2], 1e5);
    }

    #[test]
    fn logarithmic_falls_back_for_celsius_crossing_zero() {
        let mut sweep = temperature_sweep(-10.0, 30.0, 5);
        sweep.sweep_type = SweepType::Logarithmic;
        assert_eq!(sweep.generate_points(), vec![-10.0, 0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn sweep_from_text() {
        let sweep =
            SweepDefinition::from_text("14F", "86F", Quantity::Temperature, 5, SweepType::Linear)
                .unwrap();
        assert!((sweep.start - (-10.0)).abs() < 1e-9);
        assert!((sweep.end - 30.0).abs() < 1e-9);
        assert!(sweep.to_string().contains("14F"));
    }

    #[test]
    fn reject_invalid_point_count() {
        let result =
            SweepDefinition::from_text("0C", "30C", Quantity::Temperature, 1, SweepType::Linear);
        assert!(result.is_err());
    }

    #[test]
    fn reject_identical_bounds() {
        let result =
            SweepDefinition::from_text("20C", "68F", Quantity::Temperature, 5, SweepType::Linear);
        assert!(result.is_err());
    }

    #[test]
    fn constant_rh_line_rises_with_temperature() {
        let result =
            execute_temperature_sweep(&temperature_sweep(-10.0, 40.0, 11), 0.5, P_STD_PA).unwrap();
        assert_eq!(result.num_successful, 11);
        let w = result.humidity_ratio();
        assert!(w.windows(2).all(|p| p[1] > p[0]));
    }

    #[test]
    fn failed_points_are_counted() {
        // Saturated air above the wet-bulb bracket fails to converge
        let result =
            execute_temperature_sweep(&temperature_sweep(50.0, 80.0, 4), 1.0, P_STD_PA).unwrap();
        assert_eq!(result.num_successful, 2);
        assert_eq!(result.num_failed, 2);
        assert_eq!(result.successful_independent_values(), vec![50.0, 60.0]);
    }

    #[test]
    fn humidity_sweep_at_fixed_temperature() {
        let sweep = SweepDefinition::from_text(
            "0%",
            "100%",
            Quantity::RelativeHumidity,
            5,
            SweepType::Linear,
        )
        .unwrap();
        let result = execute_humidity_sweep(&sweep, 20.0, P_STD_PA).unwrap();
        let twb = result.wet_bulb_c();
        assert_eq!(twb.len(), 5);
        assert!(twb.windows(2).all(|p| p[1] > p[0]));
        assert!((twb[4] - 20.0).abs() < 5e-3);
    }

    #[test]
    fn wrong_quantity_is_rejected() {
        let sweep = temperature_sweep(0.0, 10.0, 3);
        assert!(execute_humidity_sweep(&sweep, 20.0, P_STD_PA).is_err());
    }
}
