use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default top padding applied when the host does not provide one.
pub const DEFAULT_PADDING_TOP_PX: f64 = 16.0;
/// Default right padding. Despite the name it offsets the plot from the left
/// edge, leaving room for the value labels.
pub const DEFAULT_PADDING_RIGHT_PX: f64 = 64.0;

/// Pixel surface a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Viewport plus the paddings every geometry pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub viewport: Viewport,
    pub padding_top: f64,
    pub padding_right: f64,
}

impl ChartFrame {
    /// Creates a frame with the default paddings.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            padding_top: DEFAULT_PADDING_TOP_PX,
            padding_right: DEFAULT_PADDING_RIGHT_PX,
        }
    }

    #[must_use]
    pub const fn with_padding(mut self, padding_top: f64, padding_right: f64) -> Self {
        self.padding_top = padding_top;
        self.padding_right = padding_right;
        self
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.viewport.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.viewport.height
    }

    /// Horizontal space shared by all category slots.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.viewport.width - self.padding_right
    }

    /// Width of one category slot for `count` categories, `0.0` when empty.
    #[must_use]
    pub fn slot_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.plot_width() / count as f64
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        if !self.padding_top.is_finite() || !self.padding_right.is_finite() {
            return Err(ChartError::InvalidData(
                "frame paddings must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
