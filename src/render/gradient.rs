use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Identifier a `Fill::Gradient` uses to reference a frame definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientId(String);

impl GradientId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn background() -> Self {
        Self::new("backgroundGradient")
    }

    #[must_use]
    pub fn fill_shadow() -> Self {
        Self::new("fillShadowGradient")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient in user-space pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub id: GradientId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: SmallVec<[GradientStop; 2]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(id: GradientId, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            id,
            x1,
            y1,
            x2,
            y2,
            stops: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset, color));
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.id.as_str().is_empty() {
            return Err(ChartError::InvalidData(
                "gradient id must not be empty".to_owned(),
            ));
        }
        if ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "gradient `{}` coordinates must be finite",
                self.id
            )));
        }
        if self.stops.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "gradient `{}` needs at least one stop",
                self.id
            )));
        }
        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(previous..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(format!(
                    "gradient `{}` stop offsets must be ascending within [0, 1]",
                    self.id
                )));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}
