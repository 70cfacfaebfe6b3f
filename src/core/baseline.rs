//! Value normalization shared by every bar and axis geometry pass.
//!
//! Heights returned here are in "full height" units: callers apply the
//! [`PLOT_HEIGHT_RATIO`] convention when converting to pixels.

use crate::core::series::Extremes;

/// Fraction of the frame height used by the plot area.
pub const PLOT_HEIGHT_RATIO: f64 = 3.0 / 4.0;

/// Sign layout of a sample set, which decides where the baseline sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignLayout {
    NonNegative,
    NonPositive,
    Mixed,
}

impl SignLayout {
    #[must_use]
    pub fn of(extremes: Extremes) -> Self {
        if extremes.min >= 0.0 {
            Self::NonNegative
        } else if extremes.max <= 0.0 {
            Self::NonPositive
        } else {
            Self::Mixed
        }
    }
}

/// Value span used to normalize heights. A flat series maps to `1.0`.
#[must_use]
pub fn scaler(values: &[f64], from_zero: bool) -> f64 {
    let Some(extremes) = Extremes::of(values) else {
        return 1.0;
    };
    let extremes = if from_zero {
        extremes.including_zero()
    } else {
        extremes
    };
    let span = extremes.span();
    if span == 0.0 || !span.is_finite() {
        1.0
    } else {
        span
    }
}

/// Distance from the top of the plot to the zero line, in full-height units.
#[must_use]
pub fn base_height(values: &[f64], height: f64, from_zero: bool) -> f64 {
    let Some(extremes) = Extremes::of(values) else {
        return height;
    };
    match SignLayout::of(extremes) {
        SignLayout::NonNegative => height,
        SignLayout::NonPositive => 0.0,
        SignLayout::Mixed => height * extremes.max / scaler(values, from_zero),
    }
}

/// Signed bar height of `value` against the extremes of `values`.
#[must_use]
pub fn value_height(value: f64, values: &[f64], height: f64, from_zero: bool) -> f64 {
    let Some(extremes) = Extremes::of(values) else {
        return 0.0;
    };
    let scaler = scaler(values, from_zero);
    let offset = match SignLayout::of(extremes) {
        SignLayout::Mixed => value,
        _ if from_zero => value,
        SignLayout::NonNegative => value - extremes.min,
        SignLayout::NonPositive => value - extremes.max,
    };
    height * (offset / scaler)
}

/// Pixel y of a full-height offset once the plot ratio and top padding apply.
#[must_use]
pub fn plot_y(full_height_offset: f64, padding_top: f64) -> f64 {
    full_height_offset * PLOT_HEIGHT_RATIO + padding_top
}

#[cfg(test)]
mod tests {
    use super::{SignLayout, base_height, scaler, value_height};
    use crate::core::series::Extremes;

    #[test]
    fn flat_series_uses_unit_scaler() {
        assert_eq!(scaler(&[5.0, 5.0], false), 1.0);
        assert_eq!(scaler(&[], false), 1.0);
    }

    #[test]
    fn from_zero_scaler_includes_zero() {
        assert_eq!(scaler(&[10.0, 30.0], false), 20.0);
        assert_eq!(scaler(&[10.0, 30.0], true), 30.0);
    }

    #[test]
    fn sign_layout_classifies_extremes() {
        let layout = |values: &[f64]| SignLayout::of(Extremes::of(values).expect("non-empty"));
        assert_eq!(layout(&[0.0, 4.0]), SignLayout::NonNegative);
        assert_eq!(layout(&[-3.0, 0.0]), SignLayout::NonPositive);
        assert_eq!(layout(&[-3.0, 4.0]), SignLayout::Mixed);
    }

    #[test]
    fn base_height_follows_sign_layout() {
        assert_eq!(base_height(&[10.0, 20.0], 200.0, false), 200.0);
        assert_eq!(base_height(&[-10.0, -20.0], 200.0, false), 0.0);
        assert_eq!(base_height(&[-10.0, 30.0], 200.0, false), 150.0);
    }

    #[test]
    fn value_height_is_relative_to_minimum_for_positive_series() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(value_height(10.0, &values, 200.0, false), 0.0);
        assert_eq!(value_height(20.0, &values, 200.0, false), 100.0);
        assert_eq!(value_height(30.0, &values, 200.0, false), 200.0);
    }

    #[test]
    fn value_height_from_zero_measures_from_zero() {
        let values = [10.0, 20.0, 40.0];
        assert_eq!(value_height(10.0, &values, 200.0, true), 50.0);
        assert_eq!(value_height(40.0, &values, 200.0, true), 200.0);
    }

    #[test]
    fn value_height_is_signed_for_mixed_series() {
        let values = [-10.0, 30.0];
        assert_eq!(value_height(-10.0, &values, 200.0, false), -50.0);
        assert_eq!(value_height(30.0, &values, 200.0, false), 150.0);
        assert_eq!(value_height(0.0, &values, 200.0, false), 0.0);
    }

    #[test]
    fn value_height_for_negative_series_is_relative_to_maximum() {
        let values = [-40.0, -10.0];
        assert_eq!(value_height(-10.0, &values, 300.0, false), 0.0);
        assert_eq!(value_height(-40.0, &values, 300.0, false), -300.0);
    }
}
