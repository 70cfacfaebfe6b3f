use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::GradientId;

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes from either the channel struct or a `#rgb`, `#rrggbb` or
/// `#rrggbbaa` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with its alpha multiplied by `opacity`.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            alpha: (self.alpha * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    /// `#rrggbb` form of the color channels, alpha ignored.
    #[must_use]
    pub fn to_hex_rgb(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{input}`"));
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map(|value| f64::from(value) / 255.0);

        let channels = match digits.len() {
            3 | 4 => digits
                .chars()
                .map(|digit| channel(&digit.to_string().repeat(2)))
                .collect::<Result<Vec<_>, _>>(),
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|start| channel(&digits[start..start + 2]))
                .collect::<Result<Vec<_>, _>>(),
            _ => return Err(invalid()),
        }
        .map_err(|_| invalid())?;

        Ok(Self::rgba(
            channels[0],
            channels[1],
            channels[2],
            channels.get(3).copied().unwrap_or(1.0),
        ))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Accepted input shapes for [`Color`].
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque_alpha")]
        alpha: f64,
    },
}

fn opaque_alpha() -> f64 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ChartError;

    fn try_from(repr: ColorRepr) -> ChartResult<Self> {
        match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Self::rgba(red, green, blue, alpha)),
        }
    }
}

/// Stroke pattern for line primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed {
        dash_px: f64,
        gap_px: f64,
    },
}

impl LineStrokeStyle {
    fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid => Ok(()),
            Self::Dashed { dash_px, gap_px } => {
                if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px < 0.0 {
                    return Err(ChartError::InvalidData(
                        "dash pattern must be finite with dash > 0 and gap >= 0".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Paint source for filled shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Solid(Color),
    Gradient(GradientId),
}

/// Draw command for one (optionally rounded) rectangle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Fill,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Fill) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::InvalidData(
                "rect size must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        match &self.fill {
            Fill::Solid(color) => color.validate(),
            Fill::Gradient(_) => Ok(()),
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Which point of the text run sits on `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Draw command for one label in pixel space.
///
/// `rotation_deg` rotates the run clockwise around its own anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            anchor,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates and rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
