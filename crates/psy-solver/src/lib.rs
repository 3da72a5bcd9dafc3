//! Bracketed scalar root finding for psychroflow.
//!
//! This crate provides Brent's method for a single unknown enclosed in a
//! closed bracket. The residual is an arbitrary fallible closure so callers
//! can surface their own evaluation errors through the solve.

pub mod bracket;
pub mod error;

pub use bracket::{BracketConfig, BracketReport, brent};
pub use error::{SolverError, SolverResult};
