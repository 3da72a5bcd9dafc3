//! Station observation files.

use crate::error::{CliError, CliResult};
use psy_core::P_STD_PA;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A weather station and its observations, as stored in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationFile {
    pub name: String,
    /// Station elevation [m]
    #[serde(default)]
    pub elevation_m: f64,
    /// Sea-level pressure [Pa]
    #[serde(default = "default_sea_level_pressure")]
    pub sea_level_pressure_pa: f64,
    pub observations: Vec<Observation>,
}

/// One observation; absent fields are missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub label: String,
    /// Dry-bulb temperature [°C]
    pub t_c: Option<f64>,
    /// Relative humidity [-]
    pub rh: Option<f64>,
}

fn default_sea_level_pressure() -> f64 {
    P_STD_PA
}

impl StationFile {
    pub fn temperatures(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.t_c).collect()
    }

    pub fn humidities(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.rh).collect()
    }
}

/// Load and validate a station file.
pub fn load_station(path: &Path) -> CliResult<StationFile> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::StationFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_station(&content)
}

pub fn parse_station(content: &str) -> CliResult<StationFile> {
    let station: StationFile = serde_yaml::from_str(content)?;
    validate_station(&station)?;
    Ok(station)
}

pub fn validate_station(station: &StationFile) -> CliResult<()> {
    if station.observations.is_empty() {
        return Err(CliError::Validation(format!(
            "Station '{}' must have at least one observation",
            station.name
        )));
    }
    if !station.elevation_m.is_finite() {
        return Err(CliError::Validation(format!(
            "Station '{}' elevation must be finite",
            station.name
        )));
    }
    if !(station.sea_level_pressure_pa.is_finite() && station.sea_level_pressure_pa > 0.0) {
        return Err(CliError::Validation(format!(
            "Station '{}' sea-level pressure must be positive",
            station.name
        )));
    }
    Ok(())
}
