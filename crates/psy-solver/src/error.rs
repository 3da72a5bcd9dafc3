//! Error types for root-finding operations.

use psy_core::PsyError;
use thiserror::Error;

/// Errors that can occur during a bracketed solve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid bracket [{lo}, {hi}]")]
    InvalidBracket { lo: f64, hi: f64 },

    #[error("No sign change over [{lo}, {hi}]: f(lo) = {f_lo}, f(hi) = {f_hi}")]
    NoSignChange { lo: f64, hi: f64, f_lo: f64, f_hi: f64 },

    #[error("Maximum iterations {iterations} reached, best = {best}, residual = {residual}")]
    MaxIterations {
        iterations: usize,
        best: f64,
        residual: f64,
    },

    #[error("Non-finite residual {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PsyError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::NonFinite { value, .. } => PsyError::NonFinite {
                what: "root-finder residual",
                value,
            },
            other => PsyError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::NoSignChange {
            lo: -100.0,
            hi: 65.0,
            f_lo: 1.0,
            f_hi: 2.0,
        };
        assert!(err.to_string().contains("No sign change"));
    }

    #[test]
    fn error_to_psy_error() {
        let err: PsyError = SolverError::NonFinite {
            x: 1.0,
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, PsyError::NonFinite { .. }));
    }
}
