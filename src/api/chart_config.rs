use serde::{Deserialize, Serialize};

use crate::core::bar_series::DEFAULT_BAR_PERCENTAGE;
use crate::core::axis::{DEFAULT_SEGMENTS, DEFAULT_Y_LABELS_OFFSET_PX};
use crate::core::types::{DEFAULT_PADDING_RIGHT_PX, DEFAULT_PADDING_TOP_PX};
use crate::core::{ChartFrame, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_CHART_WIDTH_PX: f64 = 320.0;
pub const DEFAULT_CHART_HEIGHT_PX: f64 = 220.0;
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
/// Upper bound accepted for `decimalPlaces`; larger requests are clamped.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// Labels and datasets of one chart. Only the first dataset is drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
}

/// Paint options (`chartConfig` in the JSON contract).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyleConfig {
    #[serde(default = "default_bar_percentage")]
    pub bar_percentage: f64,
    #[serde(default)]
    pub bar_radius: f64,
    /// Base color; layers derive their paint by scaling its opacity.
    #[serde(default = "default_color")]
    pub color: Color,
    /// Label color, falls back to `color`.
    #[serde(default)]
    pub label_color: Option<Color>,
    #[serde(default = "default_bar_text_color")]
    pub bar_text_color: Color,
    #[serde(default = "default_background_gradient_from")]
    pub background_gradient_from: Color,
    #[serde(default = "default_opacity")]
    pub background_gradient_from_opacity: f64,
    #[serde(default = "default_background_gradient_to")]
    pub background_gradient_to: Color,
    #[serde(default = "default_opacity")]
    pub background_gradient_to_opacity: f64,
    /// Bar fill color, falls back to `color`.
    #[serde(default)]
    pub fill_shadow_gradient: Option<Color>,
    #[serde(default = "default_fill_shadow_gradient_opacity")]
    pub fill_shadow_gradient_opacity: f64,
}

impl Default for ChartStyleConfig {
    fn default() -> Self {
        Self {
            bar_percentage: default_bar_percentage(),
            bar_radius: 0.0,
            color: default_color(),
            label_color: None,
            bar_text_color: default_bar_text_color(),
            background_gradient_from: default_background_gradient_from(),
            background_gradient_from_opacity: default_opacity(),
            background_gradient_to: default_background_gradient_to(),
            background_gradient_to_opacity: default_opacity(),
            fill_shadow_gradient: None,
            fill_shadow_gradient_opacity: default_fill_shadow_gradient_opacity(),
        }
    }
}

impl ChartStyleConfig {
    /// Base color at `opacity`.
    #[must_use]
    pub fn color(&self, opacity: f64) -> Color {
        self.color.with_opacity(opacity)
    }

    #[must_use]
    pub fn label_color(&self, opacity: f64) -> Color {
        self.label_color.unwrap_or(self.color).with_opacity(opacity)
    }

    #[must_use]
    pub fn fill_shadow_color(&self) -> Color {
        self.fill_shadow_gradient.unwrap_or(self.color)
    }
}

/// Outer frame options (`style` in the JSON contract).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    #[serde(default)]
    pub border_radius: f64,
    #[serde(default = "default_padding_top")]
    pub padding_top: f64,
    #[serde(default = "default_padding_right")]
    pub padding_right: f64,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            border_radius: 0.0,
            padding_top: DEFAULT_PADDING_TOP_PX,
            padding_right: DEFAULT_PADDING_RIGHT_PX,
        }
    }
}

/// Bar chart input contract.
///
/// Every field except `data` has a default, so a host can send as little as
/// `{"data": {"datasets": [{"data": [1, 2, 3]}]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    pub data: ChartData,
    #[serde(default)]
    pub chart_config: ChartStyleConfig,
    #[serde(default)]
    pub style: FrameStyle,
    #[serde(default = "default_true")]
    pub with_horizontal_labels: bool,
    #[serde(default = "default_true")]
    pub with_vertical_labels: bool,
    #[serde(default = "default_true")]
    pub with_inner_lines: bool,
    #[serde(default = "default_true")]
    pub show_bar_tops: bool,
    #[serde(default = "default_true")]
    pub show_bar_text: bool,
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default)]
    pub decimal_places: Option<u32>,
    #[serde(default)]
    pub vertical_label_rotation: f64,
    #[serde(default)]
    pub horizontal_label_rotation: f64,
    #[serde(default)]
    pub y_max: Option<f64>,
    #[serde(default)]
    pub from_zero: bool,
    #[serde(default)]
    pub y_axis_label: String,
    #[serde(default)]
    pub y_axis_suffix: String,
    #[serde(default)]
    pub x_axis_label: String,
    #[serde(default = "default_y_labels_offset")]
    pub y_labels_offset: f64,
    #[serde(default)]
    pub x_labels_offset: f64,
    #[serde(default)]
    pub hide_points_at_index: Vec<usize>,
}

impl BarChartConfig {
    /// Creates a config for one unlabeled dataset with every option defaulted.
    #[must_use]
    pub fn new(width: f64, height: f64, values: Vec<f64>) -> Self {
        Self {
            width,
            height,
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset { data: values }],
            },
            chart_config: ChartStyleConfig::default(),
            style: FrameStyle::default(),
            with_horizontal_labels: true,
            with_vertical_labels: true,
            with_inner_lines: true,
            show_bar_tops: true,
            show_bar_text: true,
            segments: DEFAULT_SEGMENTS,
            decimal_places: None,
            vertical_label_rotation: 0.0,
            horizontal_label_rotation: 0.0,
            y_max: None,
            from_zero: false,
            y_axis_label: String::new(),
            y_axis_suffix: String::new(),
            x_axis_label: String::new(),
            y_labels_offset: DEFAULT_Y_LABELS_OFFSET_PX,
            x_labels_offset: 0.0,
            hide_points_at_index: Vec::new(),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_bar_percentage(mut self, bar_percentage: f64) -> Self {
        self.chart_config.bar_percentage = bar_percentage;
        self
    }

    #[must_use]
    pub fn with_bar_radius(mut self, bar_radius: f64) -> Self {
        self.chart_config.bar_radius = bar_radius;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.chart_config.color = color;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding_top: f64, padding_right: f64) -> Self {
        self.style.padding_top = padding_top;
        self.style.padding_right = padding_right;
        self
    }

    #[must_use]
    pub fn with_border_radius(mut self, border_radius: f64) -> Self {
        self.style.border_radius = border_radius;
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }

    #[must_use]
    pub fn with_y_max(mut self, y_max: f64) -> Self {
        self.y_max = Some(y_max);
        self
    }

    #[must_use]
    pub fn with_from_zero(mut self, from_zero: bool) -> Self {
        self.from_zero = from_zero;
        self
    }

    #[must_use]
    pub fn with_bar_tops(mut self, show: bool) -> Self {
        self.show_bar_tops = show;
        self
    }

    #[must_use]
    pub fn with_bar_text(mut self, show: bool) -> Self {
        self.show_bar_text = show;
        self
    }

    #[must_use]
    pub fn with_inner_lines(mut self, enabled: bool) -> Self {
        self.with_inner_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, horizontal: bool, vertical: bool) -> Self {
        self.with_horizontal_labels = horizontal;
        self.with_vertical_labels = vertical;
        self
    }

    #[must_use]
    pub fn with_label_rotations(mut self, vertical_deg: f64, horizontal_deg: f64) -> Self {
        self.vertical_label_rotation = vertical_deg;
        self.horizontal_label_rotation = horizontal_deg;
        self
    }

    #[must_use]
    pub fn with_axis_affixes(
        mut self,
        y_axis_label: impl Into<String>,
        y_axis_suffix: impl Into<String>,
        x_axis_label: impl Into<String>,
    ) -> Self {
        self.y_axis_label = y_axis_label.into();
        self.y_axis_suffix = y_axis_suffix.into();
        self.x_axis_label = x_axis_label.into();
        self
    }

    #[must_use]
    pub fn with_hidden_label_indices(mut self, indices: Vec<usize>) -> Self {
        self.hide_points_at_index = indices;
        self
    }

    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        ChartFrame::new(self.width, self.height)
            .with_padding(self.style.padding_top, self.style.padding_right)
    }

    /// Series drawn by the chart, `None` when no dataset is present.
    #[must_use]
    pub fn series(&self) -> Option<Series> {
        let dataset = self.data.datasets.first()?;
        Some(
            Series::new(dataset.data.clone())
                .with_y_max(self.y_max)
                .with_from_zero(self.from_zero),
        )
    }

    #[must_use]
    pub fn effective_decimal_places(&self) -> u32 {
        self.decimal_places
            .unwrap_or(DEFAULT_DECIMAL_PLACES)
            .min(MAX_DECIMAL_PLACES)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.frame().validate()?;

        let dataset = self.data.datasets.first().ok_or(ChartError::MissingDataset)?;
        if let Some(position) = dataset.data.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset value at index {position} must be finite"
            )));
        }
        if let Some(y_max) = self.y_max {
            if !y_max.is_finite() {
                return Err(ChartError::InvalidData("yMax must be finite".to_owned()));
            }
        }

        let bar_percentage = self.chart_config.bar_percentage;
        if !bar_percentage.is_finite() || !(0.0..=1.0).contains(&bar_percentage) {
            return Err(ChartError::InvalidData(
                "barPercentage must be finite and in [0, 1]".to_owned(),
            ));
        }
        for (name, value) in [
            ("barRadius", self.chart_config.bar_radius),
            ("borderRadius", self.style.border_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("verticalLabelRotation", self.vertical_label_rotation),
            ("horizontalLabelRotation", self.horizontal_label_rotation),
            ("yLabelsOffset", self.y_labels_offset),
            ("xLabelsOffset", self.x_labels_offset),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_width() -> f64 {
    DEFAULT_CHART_WIDTH_PX
}

fn default_height() -> f64 {
    DEFAULT_CHART_HEIGHT_PX
}

fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}

fn default_y_labels_offset() -> f64 {
    DEFAULT_Y_LABELS_OFFSET_PX
}

fn default_padding_top() -> f64 {
    DEFAULT_PADDING_TOP_PX
}

fn default_padding_right() -> f64 {
    DEFAULT_PADDING_RIGHT_PX
}

fn default_bar_percentage() -> f64 {
    DEFAULT_BAR_PERCENTAGE
}

fn default_opacity() -> f64 {
    1.0
}

fn default_fill_shadow_gradient_opacity() -> f64 {
    0.1
}

fn default_color() -> Color {
    Color::rgb(26.0 / 255.0, 1.0, 146.0 / 255.0)
}

fn default_bar_text_color() -> Color {
    Color::WHITE
}

fn default_background_gradient_from() -> Color {
    Color::rgb(30.0 / 255.0, 41.0 / 255.0, 35.0 / 255.0)
}

fn default_background_gradient_to() -> Color {
    Color::rgb(8.0 / 255.0, 19.0 / 255.0, 13.0 / 255.0)
}
