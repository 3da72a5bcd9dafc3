//! Humidity ratio (ASHRAE Fundamentals eqs. 20 and 22).

use crate::error::AirResult;
use crate::saturation::p_ws_t;
use psy_core::{MOLAR_MASS_RATIO, P_STD_PA};

/// Humidity ratio [kg/kg] from partial vapor pressure `p_w` [Pa].
///
/// `0.62198 * p_w / (p_atm - p_w)`. Not finite when `p_w == p_atm`.
pub fn w_pw(p_w: f64, p_atm: f64) -> f64 {
    MOLAR_MASS_RATIO * p_w / (p_atm - p_w)
}

/// [`w_pw`] at standard pressure.
pub fn w_pw_std(p_w: f64) -> f64 {
    w_pw(p_w, P_STD_PA)
}

/// Partial vapor pressure [Pa] from humidity ratio `w`; inverse of [`w_pw`].
pub fn p_w_w(w: f64, p_atm: f64) -> f64 {
    p_atm * w / (MOLAR_MASS_RATIO + w)
}

/// Partial vapor pressure [Pa] at temperature `t` [°C] and relative humidity `rh`.
pub fn p_w_t_rh(t: f64, rh: f64) -> AirResult<f64> {
    Ok(rh * p_ws_t(t)?)
}

/// Humidity ratio [kg/kg] at temperature `t` [°C], relative humidity `rh` and pressure `p_atm` [Pa].
pub fn w_t_rh(t: f64, rh: f64, p_atm: f64) -> AirResult<f64> {
    Ok(w_pw(p_w_t_rh(t, rh)?, p_atm))
}

/// [`w_t_rh`] at standard pressure.
pub fn w_t_rh_std(t: f64, rh: f64) -> AirResult<f64> {
    w_t_rh(t, rh, P_STD_PA)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn vapor_pressure_round_trip(p_w in 0.0_f64..50_000.0, p_atm in 60_000.0_f64..110_000.0) {
            let back = p_w_w(w_pw(p_w, p_atm), p_atm);
            prop_assert!((back - p_w).abs() <= 1e-9 * p_atm);
        }

        #[test]
        fn saturated_matches_composition(t in -100.0_f64..=100.0) {
            let direct = w_t_rh_std(t, 1.0).unwrap();
            let composed = w_pw_std(p_ws_t(t).unwrap());
            prop_assert_eq!(direct, composed);
        }

        #[test]
        fn dry_air_is_zero_everywhere(t in -100.0_f64..=200.0) {
            prop_assert_eq!(w_t_rh_std(t, 0.0).unwrap(), 0.0);
        }
    }
}
