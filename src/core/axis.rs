//! Gridline and axis-label placement shared with sibling chart types.

use serde::{Deserialize, Serialize};

use crate::core::baseline::{PLOT_HEIGHT_RATIO, scaler};
use crate::core::series::Extremes;
use crate::core::ChartFrame;

pub const DEFAULT_SEGMENTS: usize = 4;
pub const LABEL_FONT_SIZE_PX: f64 = 12.0;
pub const DEFAULT_Y_LABELS_OFFSET_PX: f64 = 12.0;
/// Downward shift applied to value labels so their baseline sits on the gridline.
const VALUE_LABEL_BASELINE_SHIFT_PX: f64 = 12.0;
/// Single-label `from_zero` charts pin the label just below the top padding.
const SINGLE_VALUE_LABEL_TOP_SHIFT_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Value-axis label slot: the numeric value it shows and where its end anchor sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelSlot {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Category-axis label slot under one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabelSlot {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Dashed background lines spanning the plot, top to bottom.
#[must_use]
pub fn horizontal_grid_lines(frame: &ChartFrame, segments: usize) -> Vec<GridLine> {
    if segments == 0 {
        return Vec::new();
    }
    let step = frame.height() * PLOT_HEIGHT_RATIO / segments as f64;
    (0..segments)
        .map(|i| GridLine {
            x1: frame.padding_right,
            x2: frame.width(),
            y: step * i as f64 + frame.padding_top,
        })
        .collect()
}

/// Value-axis labels, bottom to top. `segments == 1` collapses to a single
/// label showing the first value.
#[must_use]
pub fn value_label_slots(
    values: &[f64],
    frame: &ChartFrame,
    segments: usize,
    from_zero: bool,
    y_labels_offset: f64,
) -> Vec<ValueLabelSlot> {
    let Some(extremes) = Extremes::of(values) else {
        return Vec::new();
    };
    if segments == 0 {
        return Vec::new();
    }

    let x = frame.padding_right - y_labels_offset;
    let height = frame.height();

    if segments == 1 {
        let y = if from_zero {
            frame.padding_top + SINGLE_VALUE_LABEL_TOP_SHIFT_PX
        } else {
            height * PLOT_HEIGHT_RATIO + VALUE_LABEL_BASELINE_SHIFT_PX
        };
        return vec![ValueLabelSlot {
            index: 0,
            value: values[0],
            x,
            y,
        }];
    }

    let floor = if from_zero {
        extremes.including_zero().min
    } else {
        extremes.min
    };
    let value_step = scaler(values, from_zero) / segments as f64;
    let pixel_step = (height - frame.padding_top) / segments as f64;

    (0..=segments)
        .map(|i| ValueLabelSlot {
            index: i,
            value: value_step * i as f64 + floor,
            x,
            y: height * PLOT_HEIGHT_RATIO - pixel_step * i as f64 + VALUE_LABEL_BASELINE_SHIFT_PX,
        })
        .collect()
}

/// Category labels left to right, skipping indices in `hidden`.
#[must_use]
pub fn category_label_slots(
    label_count: usize,
    frame: &ChartFrame,
    horizontal_offset: f64,
    x_labels_offset: f64,
    hidden: &[usize],
) -> Vec<CategoryLabelSlot> {
    let slot_width = frame.slot_width(label_count);
    let y = frame.height() * PLOT_HEIGHT_RATIO
        + frame.padding_top
        + LABEL_FONT_SIZE_PX * 2.0
        + x_labels_offset;

    (0..label_count)
        .filter(|index| !hidden.contains(index))
        .map(|index| CategoryLabelSlot {
            index,
            x: slot_width * index as f64 + frame.padding_right + horizontal_offset,
            y,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{category_label_slots, horizontal_grid_lines, value_label_slots};
    use crate::core::ChartFrame;

    #[test]
    fn grid_lines_split_plot_height_by_segments() {
        let frame = ChartFrame::new(300.0, 200.0);
        let lines = horizontal_grid_lines(&frame, 4);
        let ys: Vec<f64> = lines.iter().map(|line| line.y).collect();
        assert_eq!(ys, vec![16.0, 53.5, 91.0, 128.5]);
        assert!(lines.iter().all(|line| line.x1 == 64.0 && line.x2 == 300.0));
        assert!(horizontal_grid_lines(&frame, 0).is_empty());
    }

    #[test]
    fn value_labels_step_from_minimum() {
        let frame = ChartFrame::new(300.0, 200.0);
        let slots = value_label_slots(&[10.0, 20.0, 30.0], &frame, 4, false, 12.0);
        let values: Vec<f64> = slots.iter().map(|slot| slot.value).collect();
        assert_eq!(values, vec![10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(slots[0].x, 52.0);
        assert_eq!(slots[0].y, 162.0);
        assert_eq!(slots[4].y, 162.0 - 184.0);
    }

    #[test]
    fn single_segment_shows_first_value() {
        let frame = ChartFrame::new(300.0, 200.0);
        let slots = value_label_slots(&[7.0, 20.0], &frame, 1, true, 12.0);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].value, 7.0);
        assert_eq!(slots[0].y, 20.0);
    }

    #[test]
    fn category_labels_skip_hidden_indices() {
        let frame = ChartFrame::new(300.0, 200.0);
        let slots = category_label_slots(4, &frame, 32.0, 0.0, &[1]);
        let indices: Vec<usize> = slots.iter().map(|slot| slot.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(slots[0].x, 96.0);
        assert_eq!(slots[0].y, 150.0 + 16.0 + 24.0);
    }
}
