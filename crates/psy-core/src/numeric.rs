//! Float and missing-value helpers.

/// Scalar missing-value marker.
///
/// `NaN` plays the role of an absent observation at the scalar layer; the
/// column layer uses `Option<f64>` instead.
pub const MISSING: f64 = f64::NAN;

#[inline]
pub fn is_missing(v: f64) -> bool {
    v.is_nan()
}

/// Convert a scalar result back into the column representation.
#[inline]
pub fn to_option(v: f64) -> Option<f64> {
    if is_missing(v) { None } else { Some(v) }
}

/// Convert a column element into the scalar representation.
#[inline]
pub fn from_option(v: Option<f64>) -> f64 {
    v.unwrap_or(MISSING)
}

/// Mean relative difference between two equal-length series.
///
/// `sum(|actual - expected|) / sum(|expected|)`, the measure reference
/// property tables are usually checked with. Returns `None` when the lengths
/// differ or the expected series sums to zero.
pub fn mean_relative_difference(actual: &[f64], expected: &[f64]) -> Option<f64> {
    if actual.len() != expected.len() {
        return None;
    }
    let scale: f64 = expected.iter().map(|e| e.abs()).sum();
    if scale == 0.0 {
        return None;
    }
    let diff: f64 = actual
        .iter()
        .zip(expected)
        .map(|(a, e)| (a - e).abs())
        .sum();
    Some(diff / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_round_trip() {
        assert_eq!(to_option(from_option(None)), None);
        assert_eq!(to_option(from_option(Some(2.5))), Some(2.5));
        assert!(is_missing(MISSING));
        // Infinity is a value, not a missing observation.
        assert!(!is_missing(f64::INFINITY));
    }

    #[test]
    fn mean_relative_difference_matches_hand_value() {
        let mrd = mean_relative_difference(&[1.0, 2.2], &[1.0, 2.0]).unwrap();
        assert!((mrd - 0.2 / 3.0).abs() < 1e-12);
        assert!(mean_relative_difference(&[1.0], &[1.0, 2.0]).is_none());
        assert!(mean_relative_difference(&[1.0], &[0.0]).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn identical_series_have_zero_difference(
            xs in prop::collection::vec(-1e6_f64..1e6_f64, 1..16)
        ) {
            prop_assume!(xs.iter().any(|x| *x != 0.0));
            prop_assert_eq!(mean_relative_difference(&xs, &xs), Some(0.0));
        }
    }
}
