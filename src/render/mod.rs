mod frame;
mod gradient;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{GroupNode, PrimitiveCounts, RenderFrame, SceneNode};
pub use gradient::{GradientId, GradientStop, LinearGradient};
pub use layer_stack::ChartLayer;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, Fill, LinePrimitive, LineStrokeStyle, RectPrimitive, TextAnchor, TextPrimitive,
};
pub use svg_backend::{SvgRenderer, render_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart geometry.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
