//! psy-air: moist-air psychrometrics for psychroflow.
//!
//! Provides the ASHRAE Fundamentals closed-form correlations:
//! - atmospheric pressure at elevation
//! - saturation pressure of water over ice and liquid
//! - humidity ratio and moist-air enthalpy
//! - wet-bulb temperature by adiabatic saturation (bracketed root find)
//!
//! Every evaluator is a pure function of its inputs. Scalars use `NaN` for a
//! missing observation and return a missing result rather than an error;
//! the [`column`] module applies the same evaluators over columns of
//! `Option<f64>`.
//!
//! # Example
//!
//! ```
//! use psy_air::{p_atm_z_std, t_wb, w_t_rh};
//!
//! let p = p_atm_z_std(350.0);
//! let w = w_t_rh(24.0, 0.45, p).unwrap();
//! let twb = t_wb(24.0, 0.45, p).unwrap();
//! assert!(w > 0.0 && twb < 24.0);
//! ```

pub mod column;
pub mod elevation;
pub mod enthalpy;
pub mod error;
pub mod humidity;
pub mod saturation;
pub mod state;
pub mod sweeps;
pub mod wet_bulb;

// Re-exports for ergonomics
pub use column::{
    Column, h_t_rh_col, h_t_w_col, p_atm_z_col, p_ws_t_col, t_wb_col, t_wb_col_with, w_pw_col,
    w_t_rh_col,
};
pub use elevation::{p_atm_z, p_atm_z_std};
pub use enthalpy::{h_t_rh, h_t_rh_std, h_t_w};
pub use error::{AirError, AirResult};
pub use humidity::{p_w_t_rh, p_w_w, w_pw, w_pw_std, w_t_rh, w_t_rh_std};
pub use saturation::{SaturationPhase, T_MAX_C, T_MIN_C, p_ws_t};
pub use state::PsychroState;
pub use sweeps::{
    SweepDefinition, SweepResult, SweepType, execute_humidity_sweep, execute_temperature_sweep,
};
pub use wet_bulb::{WetBulbResidual, WetBulbSolver, h_phase_change, t_wb, t_wb_std};
