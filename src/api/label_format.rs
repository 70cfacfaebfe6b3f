use std::sync::Arc;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Host hook applied to category label text before the x-axis suffix.
pub type XLabelFormatterFn = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;
/// Host hook applied to the fixed-precision value text before prefix/suffix.
pub type YLabelFormatterFn = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;

/// Fixed-point text with exactly `decimal_places` fractional digits.
///
/// Rounds half away from zero on the exact binary value, so `1.005` with two
/// places prints `1.00`.
#[must_use]
pub fn format_fixed(value: f64, decimal_places: u32) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let precision = decimal_places as usize;
    match Decimal::from_f64_retain(value).or_else(|| Decimal::from_f64(value)) {
        Some(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}

/// Shortest plain text for a value, integers without a fractional part.
#[must_use]
pub fn format_plain_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{value:.0}");
    }
    format!("{value}")
}
