//! Physical constants shared by the psychrometric evaluators.

/// Standard sea-level atmospheric pressure [Pa].
///
/// Default atmospheric pressure for every evaluator that takes one.
pub const P_STD_PA: f64 = 101_325.0;

/// Offset between Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Ratio of the molar mass of water vapor to that of dry air.
pub const MOLAR_MASS_RATIO: f64 = 0.621_98;
