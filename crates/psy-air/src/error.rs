//! Psychrometric evaluation errors.

use psy_core::PsyError;
use psy_solver::SolverError;
use thiserror::Error;

/// Result type for psychrometric operations.
pub type AirResult<T> = Result<T, AirError>;

/// Errors that can occur during psychrometric evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirError {
    /// Input outside the validity range of a correlation.
    #[error("{what} = {value} outside valid range [{min}, {max}]{}", at_index(.index))]
    Domain {
        what: &'static str,
        value: f64,
        index: Option<usize>,
        min: f64,
        max: f64,
    },

    /// Root-finder failed (no bracketed root, iteration cap, non-finite residual).
    #[error("Convergence failed: {0}")]
    Convergence(#[from] SolverError),

    /// Two sliced input columns of different length.
    #[error("Column length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

impl AirError {
    pub fn is_domain(&self) -> bool {
        matches!(self, AirError::Domain { .. })
    }

    pub fn is_convergence(&self) -> bool {
        matches!(self, AirError::Convergence(_))
    }
}

impl From<AirError> for PsyError {
    fn from(err: AirError) -> Self {
        match err {
            AirError::Convergence(e) => e.into(),
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
    fn domain_error_display() {
        let err = AirError::Domain {
            what: "temperature",
            value: 300.0,
            index: Some(2),
            min: -100.0,
            max: 200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("index 2"));

        let err = AirError::Domain {
            what: "temperature",
            value: 300.0,
            index: None,
            min: -100.0,
            max: 200.0,
        };
        assert!(!err.to_string().contains("index"));
    }

    #[test]
    fn error_to_psy_error() {
        let err: PsyError = AirError::LengthMismatch {
            expected: 3,
            found: 2,
        }
        .into();
        assert!(matches!(err, PsyError::InvalidArg { .. }));
    }
}
