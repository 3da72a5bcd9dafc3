//! psy-core: stable foundation for psychroflow.
//!
//! Contains:
//! - constants (standard atmosphere, Kelvin offset, molar-mass ratio)
//! - numeric (missing-value helpers, table comparison)
//! - units (text input parsing to canonical station units)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::*;
pub use error::{PsyError, PsyResult};
pub use numeric::*;
pub use units::{Quantity, UnitValue, parse_quantity};
