//! Full psychrometric state of one observation.

use crate::elevation::p_atm_z;
use crate::error::AirResult;
use crate::enthalpy::h_t_w;
use crate::humidity::w_pw;
use crate::saturation::p_ws_t;
use crate::wet_bulb::WetBulbSolver;

/// Every derived property of a (dry-bulb, RH, pressure) observation.
///
/// Missing inputs give `NaN` in the dependent fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsychroState {
    /// Dry-bulb temperature [°C]
    pub t_c: f64,
    /// Relative humidity [-]
    pub rh: f64,
    /// Atmospheric pressure [Pa]
    pub p_atm_pa: f64,
    /// Saturation pressure at dry-bulb [Pa]
    pub p_ws_pa: f64,
    /// Partial vapor pressure [Pa]
    pub p_w_pa: f64,
    /// Humidity ratio [kg/kg]
    pub w: f64,
    /// Specific enthalpy [kJ/kg]
    pub h_kj_per_kg: f64,
    /// Wet-bulb temperature [°C]
    pub t_wb_c: f64,
}

impl PsychroState {
    /// Evaluate an observation at atmospheric pressure `p_atm` [Pa].
    pub fn from_station(t: f64, rh: f64, p_atm: f64) -> AirResult<Self> {
        Self::with_solver(&WetBulbSolver::default(), t, rh, p_atm)
    }

    /// Evaluate an observation at elevation `z` [m] above sea-level pressure `p_sl` [Pa].
    pub fn from_elevation(t: f64, rh: f64, z: f64, p_sl: f64) -> AirResult<Self> {
        Self::from_station(t, rh, p_atm_z(z, p_sl))
    }

    pub fn with_solver(solver: &WetBulbSolver, t: f64, rh: f64, p_atm: f64) -> AirResult<Self> {
        let p_ws = p_ws_t(t)?;
        let p_w = rh * p_ws;
        let w = w_pw(p_w, p_atm);
        Ok(Self {
            t_c: t,
            rh,
            p_atm_pa: p_atm,
            p_ws_pa: p_ws,
            p_w_pa: p_w,
            w,
            h_kj_per_kg: h_t_w(t, w),
            t_wb_c: solver.solve(t, rh, p_atm)?,
        })
    }

    /// Wet-bulb depression [K].
    pub fn wet_bulb_depression(&self) -> f64 {
        self.t_c - self.t_wb_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{h_t_rh, t_wb, w_t_rh};
    use psy_core::P_STD_PA;

    #[test]
    fn state_agrees_with_individual_evaluators() {
        let s = PsychroState::from_station(20.0, 0.5, P_STD_PA).unwrap();
        assert_eq!(s.w, w_t_rh(20.0, 0.5, P_STD_PA).unwrap());
        assert_eq!(s.h_kj_per_kg, h_t_rh(20.0, 0.5, P_STD_PA).unwrap());
        assert_eq!(s.t_wb_c, t_wb(20.0, 0.5, P_STD_PA).unwrap());
        assert!(s.wet_bulb_depression() > 0.0);
    }

    #[test]
    fn sea_level_elevation_matches_station_pressure() {
        let a = PsychroState::from_elevation(10.0, 0.8, 0.0, P_STD_PA).unwrap();
        let b = PsychroState::from_station(10.0, 0.8, P_STD_PA).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_humidity_leaves_dependent_fields_missing() {
        let s = PsychroState::from_station(20.0, f64::NAN, P_STD_PA).unwrap();
        assert!(s.p_ws_pa.is_finite());
        assert!(s.w.is_nan());
        assert!(s.h_kj_per_kg.is_nan());
        assert!(s.t_wb_c.is_nan());
    }
}
