//! Error types for the command-line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read station file: {path}")]
    StationFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse station YAML: {0}")]
    StationParse(#[from] serde_yaml::Error),

    #[error("Station validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    Input(#[from] psy_core::PsyError),

    #[error("Psychrometric evaluation failed: {0}")]
    Air(#[from] psy_air::AirError),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
