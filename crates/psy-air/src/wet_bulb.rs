//! Wet-bulb temperature by adiabatic saturation.
//!
//! The wet-bulb temperature `t*` satisfies the energy balance
//!
//! ```text
//! h(t, w) + (w_s(t*) - w) * h_w(t*) = h(t*, w_s(t*))
//! ```
//!
//! where `h_w` is the enthalpy of the condensed water at `t*`: liquid above
//! 0 °C, ice below. The balance has no closed form, so it is solved with a
//! bracketed root-finder.

use crate::enthalpy::{h_t_rh, h_t_w};
use crate::error::AirResult;
use crate::humidity::w_t_rh;
use psy_core::{P_STD_PA, is_missing};
use psy_solver::{BracketConfig, BracketReport, brent};

/// Enthalpy of the condensed phase [kJ/kg] at temperature `t_sat` [°C].
///
/// Ice below 0 °C (`-333.4 + 2.1 t`), liquid water otherwise (`4.186 t`).
pub fn h_phase_change(t_sat: f64) -> f64 {
    if t_sat < 0.0 {
        -333.4 + 2.1 * t_sat
    } else {
        4.186 * t_sat
    }
}

/// Energy-balance mismatch for a candidate wet-bulb temperature.
///
/// Built once per observation; the enthalpy and humidity ratio of the
/// observed air do not depend on the candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbResidual {
    p_atm: f64,
    w: f64,
    h: f64,
}

impl WetBulbResidual {
    /// Prepare the residual for dry-bulb `t` [°C], relative humidity `rh` and pressure `p_atm` [Pa].
    pub fn new(t: f64, rh: f64, p_atm: f64) -> AirResult<Self> {
        let w = w_t_rh(t, rh, p_atm)?;
        Ok(Self {
            p_atm,
            w,
            h: h_t_w(t, w),
        })
    }

    /// Humidity ratio of the observed air.
    pub fn humidity_ratio(&self) -> f64 {
        self.w
    }

    /// Enthalpy of the observed air [kJ/kg].
    pub fn enthalpy(&self) -> f64 {
        self.h
    }

    /// Residual [kJ/kg] at candidate saturation temperature `t_sat` [°C].
    ///
    /// Zero at the wet-bulb temperature, positive below it.
    pub fn eval(&self, t_sat: f64) -> AirResult<f64> {
        let w_sat = w_t_rh(t_sat, 1.0, self.p_atm)?;
        let dw = w_sat - self.w;
        let h_sat = h_t_rh(t_sat, 1.0, self.p_atm)?;
        Ok(self.h + dw * h_phase_change(t_sat) - h_sat)
    }
}

/// Wet-bulb solver: search bracket plus root-finder configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbSolver {
    /// Lower end of the search bracket [°C]
    pub t_lo: f64,
    /// Upper end of the search bracket [°C]
    pub t_hi: f64,
    pub config: BracketConfig,
}

impl Default for WetBulbSolver {
    fn default() -> Self {
        Self {
            t_lo: -100.0,
            t_hi: 65.0,
            config: BracketConfig::default(),
        }
    }
}

impl WetBulbSolver {
    /// Wet-bulb temperature [°C], or missing when any input is missing.
    pub fn solve(&self, t: f64, rh: f64, p_atm: f64) -> AirResult<f64> {
        Ok(self
            .solve_report(t, rh, p_atm)?
            .map_or(f64::NAN, |report| report.root))
    }

    /// Like [`WetBulbSolver::solve`] but returns the root-finder report.
    ///
    /// `Ok(None)` means a missing input short-circuited the solve.
    pub fn solve_report(&self, t: f64, rh: f64, p_atm: f64) -> AirResult<Option<BracketReport>> {
        if is_missing(t) || is_missing(rh) || is_missing(p_atm) {
            return Ok(None);
        }
        let residual = WetBulbResidual::new(t, rh, p_atm)?;
        let report = brent(|t_sat| residual.eval(t_sat), self.t_lo, self.t_hi, &self.config)?;
        Ok(Some(report))
    }
}

/// Wet-bulb temperature [°C] at dry-bulb `t` [°C], relative humidity `rh` and pressure `p_atm` [Pa].
///
/// Searches [-100, 65] °C. Fails with [`crate::AirError::Convergence`] when
/// the bracket holds no root, e.g. saturated air above 65 °C.
pub fn t_wb(t: f64, rh: f64, p_atm: f64) -> AirResult<f64> {
    WetBulbSolver::default().solve(t, rh, p_atm)
}

/// [`t_wb`] at standard pressure.
pub fn t_wb_std(t: f64, rh: f64) -> AirResult<f64> {
    t_wb(t, rh, P_STD_PA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirError;
    use psy_solver::SolverError;

    #[test]
    fn phase_change_branches() {
        assert!((h_phase_change(-10.0) - (-354.4)).abs() < 1e-12);
        assert!((h_phase_change(10.0) - 41.86).abs() < 1e-12);
        assert_eq!(h_phase_change(0.0), 0.0);
    }

    #[test]
    fn residual_vanishes_at_dry_bulb_for_saturated_air() {
        let r = WetBulbResidual::new(20.0, 1.0, P_STD_PA).unwrap();
        assert!(r.eval(20.0).unwrap().abs() < 1e-10);
    }

    #[test]
    fn residual_changes_sign_over_bracket() {
        let r = WetBulbResidual::new(20.0, 0.5, P_STD_PA).unwrap();
        assert!(r.eval(-100.0).unwrap() > 0.0);
        assert!(r.eval(65.0).unwrap() < 0.0);
    }

    #[test]
    fn wet_bulb_below_dry_bulb() {
        let twb = t_wb_std(25.0, 0.5).unwrap();
        assert!((twb - 17.889).abs() < 5e-3, "t_wb = {twb}");
    }

    #[test]
    fn wet_bulb_below_freezing() {
        let twb = t_wb_std(0.0, 0.5).unwrap();
        assert!((twb - (-2.977)).abs() < 5e-3, "t_wb = {twb}");
    }

    #[test]
    fn missing_input_short_circuits() {
        let solver = WetBulbSolver::default();
        assert_eq!(solver.solve_report(f64::NAN, 1.0, P_STD_PA).unwrap(), None);
        assert!(t_wb_std(f64::NAN, 1.0).unwrap().is_nan());
        assert!(t_wb(20.0, 0.5, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn saturated_air_above_bracket_fails_to_converge() {
        let err = t_wb_std(90.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            AirError::Convergence(SolverError::NoSignChange { .. })
        ));
    }

    #[test]
    fn out_of_domain_dry_bulb_is_a_domain_error() {
        assert!(t_wb_std(250.0, 0.2).unwrap_err().is_domain());
    }

    #[test]
    fn wider_bracket_reaches_hot_saturated_air() {
        let solver = WetBulbSolver {
            t_hi: 95.0,
            ..WetBulbSolver::default()
        };
        let twb = solver.solve(90.0, 1.0, P_STD_PA).unwrap();
        assert!((twb - 90.0).abs() < 5e-3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn saturated_air_wet_bulb_equals_dry_bulb(t in -60.0_f64..60.0, z in 0.0_f64..3_000.0) {
            let p = crate::elevation::p_atm_z_std(z);
            let twb = t_wb(t, 1.0, p).unwrap();
            prop_assert!((twb - t).abs() < 5e-3, "t = {}, t_wb = {}", t, twb);
        }

        #[test]
        fn wet_bulb_never_exceeds_dry_bulb(t in -40.0_f64..50.0, rh in 0.0_f64..1.0) {
            let twb = t_wb_std(t, rh).unwrap();
            prop_assert!(twb <= t + 5e-3);
        }
    }
}
