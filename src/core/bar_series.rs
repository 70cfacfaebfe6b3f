use serde::{Deserialize, Serialize};

use crate::core::baseline::{PLOT_HEIGHT_RATIO, base_height, plot_y, value_height};
use crate::core::{ChartFrame, Series};

/// Bar width in pixels at `bar_percentage == 1.0`.
pub const BASE_BAR_WIDTH_PX: f64 = 32.0;
/// Height of the accent strip drawn on top of each bar.
pub const BAR_TOP_HEIGHT_PX: f64 = 2.0;
/// Gap between a bar top and its value label baseline.
pub const BAR_TEXT_OFFSET_PX: f64 = 5.0;
/// Default bar width scale factor.
pub const DEFAULT_BAR_PERCENTAGE: f64 = 1.0;

/// Deterministic bar rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Anchor point for the value label printed above a bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLabelAnchor {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Horizontal placement shared by bars, bar tops and bar labels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarColumn {
    x: f64,
    width: f64,
}

impl BarColumn {
    /// The midpoint sits one base bar width into the slot, so scaling the
    /// width never moves it.
    fn resolve(frame: &ChartFrame, index: usize, count: usize, bar_percentage: f64) -> Self {
        let slot_start = frame.padding_right + index as f64 * frame.slot_width(count);
        let width = BASE_BAR_WIDTH_PX * bar_percentage;
        Self {
            x: slot_start + BASE_BAR_WIDTH_PX - width * 0.5,
            width,
        }
    }
}

/// Vertical inputs derived once per series.
#[derive(Debug, Clone, PartialEq)]
struct Normalization {
    values: Vec<f64>,
    base_height: f64,
    height: f64,
    from_zero: bool,
}

impl Normalization {
    fn new(series: &Series, frame: &ChartFrame) -> Self {
        let values = series.normalization_values();
        let height = frame.height();
        let base_height = base_height(&values, height, series.from_zero());
        Self {
            values,
            base_height,
            height,
            from_zero: series.from_zero(),
        }
    }

    fn value_height(&self, value: f64) -> f64 {
        value_height(value, &self.values, self.height, self.from_zero)
    }
}

/// Maps one series element to its bar rectangle.
///
/// Returns `None` when `index` is out of range.
#[must_use]
pub fn map_bar(
    series: &Series,
    frame: &ChartFrame,
    index: usize,
    bar_percentage: f64,
) -> Option<BarGeometry> {
    let value = series.get(index)?;
    let normalization = Normalization::new(series, frame);
    Some(bar_from_normalization(
        &normalization,
        frame,
        index,
        series.len(),
        value,
        bar_percentage,
    ))
}

/// Projects every element of `series` into bar rectangles, in series order.
#[must_use]
pub fn project_bars(series: &Series, frame: &ChartFrame, bar_percentage: f64) -> Vec<BarGeometry> {
    if series.is_empty() {
        return Vec::new();
    }

    let normalization = Normalization::new(series, frame);
    series
        .values()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            bar_from_normalization(
                &normalization,
                frame,
                index,
                series.len(),
                value,
                bar_percentage,
            )
        })
        .collect()
}

/// Projects the thin accent strips drawn at the value end of each bar.
#[must_use]
pub fn project_bar_tops(
    series: &Series,
    frame: &ChartFrame,
    bar_percentage: f64,
) -> Vec<BarGeometry> {
    if series.is_empty() {
        return Vec::new();
    }

    let normalization = Normalization::new(series, frame);
    series
        .values()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let column = BarColumn::resolve(frame, index, series.len(), bar_percentage);
            let bar_height = normalization.value_height(value);
            BarGeometry {
                index,
                value,
                x: column.x,
                y: plot_y(normalization.base_height - bar_height, frame.padding_top),
                width: column.width,
                height: BAR_TOP_HEIGHT_PX,
            }
        })
        .collect()
}

/// Projects the anchor points of the value labels printed above each bar.
#[must_use]
pub fn project_bar_labels(
    series: &Series,
    frame: &ChartFrame,
    bar_percentage: f64,
) -> Vec<BarLabelAnchor> {
    if series.is_empty() {
        return Vec::new();
    }

    let normalization = Normalization::new(series, frame);
    series
        .values()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let column = BarColumn::resolve(frame, index, series.len(), bar_percentage);
            let bar_height = normalization.value_height(value);
            BarLabelAnchor {
                index,
                value,
                x: column.x,
                y: plot_y(normalization.base_height - bar_height, frame.padding_top)
                    - BAR_TEXT_OFFSET_PX,
            }
        })
        .collect()
}

fn bar_from_normalization(
    normalization: &Normalization,
    frame: &ChartFrame,
    index: usize,
    count: usize,
    value: f64,
    bar_percentage: f64,
) -> BarGeometry {
    let column = BarColumn::resolve(frame, index, count, bar_percentage);
    let bar_height = normalization.value_height(value);
    // Positive bars grow up from the baseline, negative ones hang below it.
    let top_offset = if bar_height > 0.0 {
        normalization.base_height - bar_height
    } else {
        normalization.base_height
    };

    BarGeometry {
        index,
        value,
        x: column.x,
        y: plot_y(top_offset, frame.padding_top),
        width: column.width,
        height: bar_height.abs() * PLOT_HEIGHT_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::{BarColumn, map_bar, project_bars};
    use crate::core::{ChartFrame, Series};

    #[test]
    fn column_matches_half_width_offset_at_full_percentage() {
        let frame = ChartFrame::new(300.0, 200.0);
        let column = BarColumn::resolve(&frame, 0, 3, 1.0);
        assert_eq!(column.x, 64.0 + 16.0);
        assert_eq!(column.width, 32.0);
    }

    #[test]
    fn map_bar_agrees_with_projection() {
        let frame = ChartFrame::new(400.0, 240.0);
        let series = Series::new(vec![4.0, -2.0, 9.0]);
        let projected = project_bars(&series, &frame, 0.6);
        for (index, bar) in projected.iter().enumerate() {
            assert_eq!(map_bar(&series, &frame, index, 0.6), Some(*bar));
        }
        assert_eq!(map_bar(&series, &frame, 3, 0.6), None);
    }
}
