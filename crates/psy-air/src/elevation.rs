//! Atmospheric pressure at elevation (ASHRAE Fundamentals, eq. 3).

use psy_core::P_STD_PA;

/// Atmospheric pressure [Pa] at elevation `z` [m] for sea-level pressure `p_sl` [Pa].
///
/// `p_sl * (1 - 2.25577e-5 * z)^5.2559`. No domain check; the standard
/// atmosphere fit is only meaningful for roughly -5000 m to 11000 m.
pub fn p_atm_z(z: f64, p_sl: f64) -> f64 {
    p_sl * (1.0 - 2.255_77e-5 * z).powf(5.2559)
}

/// [`p_atm_z`] with standard sea-level pressure.
pub fn p_atm_z_std(z: f64) -> f64 {
    p_atm_z(z, P_STD_PA)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decreasing_with_elevation(z in 0.0_f64..10_000.0, dz in 1.0_f64..1_000.0) {
            prop_assert!(p_atm_z_std(z + dz) < p_atm_z_std(z));
        }

        #[test]
        fn proportional_to_sea_level_pressure(z in -500.0_f64..8_000.0, p_sl in 80_000.0_f64..110_000.0) {
            let ratio = p_atm_z(z, p_sl) / p_sl;
            prop_assert!((ratio - p_atm_z_std(z) / P_STD_PA).abs() < 1e-12);
        }
    }
}
