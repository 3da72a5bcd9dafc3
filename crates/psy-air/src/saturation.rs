//! Saturation pressure of water vapor (Hyland-Wexler, ASHRAE Fundamentals eqs. 5 and 6).
//!
//! ```text
//! ln(p_ws) = c1/T + c2 + c3*T + c4*T^2 + c5*T^3 + c6*T^4 + c7*ln(T)
//! ```
//!
//! with `T` in kelvin. Below 0 °C the pressure is taken over ice, at and
//! above 0 °C over liquid water.

use crate::error::{AirError, AirResult};
use psy_core::{KELVIN_OFFSET, is_missing};

/// Lower bound of the correlation [°C].
pub const T_MIN_C: f64 = -100.0;
/// Upper bound of the correlation [°C].
pub const T_MAX_C: f64 = 200.0;

/// Coefficients over ice, -100 °C to 0 °C.
const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];

/// Coefficients over liquid water, 0 °C to 200 °C. No quartic term.
const WATER: [f64; 7] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    0.0,
    6.545_967_3,
];

/// Which phase the saturation pressure is referenced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationPhase {
    Ice,
    Water,
}

impl SaturationPhase {
    pub fn at(t: f64) -> Self {
        if t < 0.0 { Self::Ice } else { Self::Water }
    }

    fn coefficients(self) -> &'static [f64; 7] {
        match self {
            Self::Ice => &ICE,
            Self::Water => &WATER,
        }
    }
}

/// Check a temperature against the correlation range.
///
/// Missing values pass; `index` is reported back for column validation.
pub fn check_domain(t: f64, index: Option<usize>) -> AirResult<()> {
    if is_missing(t) || (T_MIN_C..=T_MAX_C).contains(&t) {
        Ok(())
    } else {
        Err(AirError::Domain {
            what: "temperature",
            value: t,
            index,
            min: T_MIN_C,
            max: T_MAX_C,
        })
    }
}

/// Saturation pressure [Pa] at temperature `t` [°C].
///
/// Fails with [`AirError::Domain`] outside [-100, 200] °C. A missing (`NaN`)
/// temperature gives a missing result.
pub fn p_ws_t(t: f64) -> AirResult<f64> {
    check_domain(t, None)?;
    Ok(p_ws_unchecked(t))
}

/// Evaluate the correlation without the range check.
pub(crate) fn p_ws_unchecked(t: f64) -> f64 {
    let c = SaturationPhase::at(t).coefficients();
    let tk = t + KELVIN_OFFSET;
    let ln_p = c[0] / tk
        + c[1]
        + tk * (c[2] + tk * (c[3] + tk * (c[4] + tk * c[5])))
        + c[6] * tk.ln();
    ln_p.exp()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn increasing_with_temperature(t in -100.0_f64..199.0, dt in 0.01_f64..1.0) {
            prop_assert!(p_ws_t(t + dt).unwrap() > p_ws_t(t).unwrap());
        }
    }
}
