//! Moist-air specific enthalpy (ASHRAE Fundamentals eq. 32).

use crate::error::AirResult;
use crate::humidity::w_t_rh;
use psy_core::P_STD_PA;

/// Specific heat of dry air [kJ/(kg·K)].
const CP_DRY_AIR: f64 = 1.006;
/// Enthalpy of saturated water vapor at 0 °C [kJ/kg].
const H_VAPOR_0C: f64 = 2501.0;
/// Specific heat of water vapor [kJ/(kg·K)].
const CP_VAPOR: f64 = 1.86;

/// Specific enthalpy [kJ/kg dry air] at temperature `t` [°C] and humidity ratio `w`.
///
/// Zero at 0 °C and zero moisture.
pub fn h_t_w(t: f64, w: f64) -> f64 {
    CP_DRY_AIR * t + w * (H_VAPOR_0C + CP_VAPOR * t)
}

/// Specific enthalpy [kJ/kg] at temperature `t` [°C], relative humidity `rh` and pressure `p_atm` [Pa].
pub fn h_t_rh(t: f64, rh: f64, p_atm: f64) -> AirResult<f64> {
    Ok(h_t_w(t, w_t_rh(t, rh, p_atm)?))
}

/// [`h_t_rh`] at standard pressure.
pub fn h_t_rh_std(t: f64, rh: f64) -> AirResult<f64> {
    h_t_rh(t, rh, P_STD_PA)
}
