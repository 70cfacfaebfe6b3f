use std::fmt::Write;

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, Fill, GroupNode, LinePrimitive, LineStrokeStyle, LinearGradient, RectPrimitive,
    RenderFrame, Renderer, SceneNode, TextAnchor, TextPrimitive,
};

/// Renderer that serializes each frame into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the most recent successful `render` call.
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<String> {
        self.last_document.take()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let document = render_svg(frame)?;
        trace!(bytes = document.len(), "svg document rendered");
        self.last_document = Some(document);
        Ok(())
    }
}

/// Validates `frame` and writes it as an SVG document.
pub fn render_svg(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;
    write_document(frame).map_err(|err| {
        ChartError::InvalidData(format!("failed to write svg document: {err}"))
    })
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut svg = String::new();
    let width = num(frame.viewport.width);
    let height = num(frame.viewport.height);
    write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;

    if !frame.defs.is_empty() {
        svg.push_str("<defs>");
        for gradient in frame.defs.values() {
            write_gradient(&mut svg, gradient)?;
        }
        svg.push_str("</defs>");
    }

    for node in &frame.nodes {
        write_node(&mut svg, node)?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn write_gradient(svg: &mut String, gradient: &LinearGradient) -> std::fmt::Result {
    write!(
        svg,
        "<linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
        escape_xml(gradient.id.as_str()),
        num(gradient.x1),
        num(gradient.y1),
        num(gradient.x2),
        num(gradient.y2)
    )?;
    for stop in &gradient.stops {
        write!(
            svg,
            "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
            num(stop.offset),
            stop.color.to_hex_rgb(),
            num(stop.color.alpha)
        )?;
    }
    svg.push_str("</linearGradient>");
    Ok(())
}

fn write_node(svg: &mut String, node: &SceneNode) -> std::fmt::Result {
    match node {
        SceneNode::Rect(rect) => write_rect(svg, rect),
        SceneNode::Line(line) => write_line(svg, line),
        SceneNode::Text(text) => write_text(svg, text),
        SceneNode::Group(group) => write_group(svg, group),
    }
}

fn write_group(svg: &mut String, group: &GroupNode) -> std::fmt::Result {
    write!(svg, "<g class=\"{}\">", group.layer.as_str())?;
    for child in &group.children {
        write_node(svg, child)?;
    }
    svg.push_str("</g>");
    Ok(())
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        svg,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height)
    )?;
    if rect.corner_radius > 0.0 {
        let radius = num(rect.corner_radius);
        write!(svg, " rx=\"{radius}\" ry=\"{radius}\"")?;
    }
    match &rect.fill {
        Fill::Solid(color) => write_paint(svg, "fill", *color)?,
        Fill::Gradient(id) => write!(svg, " fill=\"url(#{})\"", escape_xml(id.as_str()))?,
    }
    svg.push_str("/>");
    Ok(())
}

fn write_line(svg: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        svg,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke-width=\"{}\"",
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        num(line.stroke_width)
    )?;
    write_paint(svg, "stroke", line.color)?;
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = line.stroke_style {
        write!(
            svg,
            " stroke-dasharray=\"{}, {}\"",
            num(dash_px),
            num(gap_px)
        )?;
    }
    svg.push_str("/>");
    Ok(())
}

fn write_text(svg: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let x = num(text.x);
    let y = num(text.y);
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    write!(
        svg,
        "<text x=\"{x}\" y=\"{y}\" font-size=\"{}\" text-anchor=\"{anchor}\"",
        num(text.font_size_px)
    )?;
    write_paint(svg, "fill", text.color)?;
    if text.rotation_deg != 0.0 {
        write!(svg, " transform=\"rotate({} {x} {y})\"", num(text.rotation_deg))?;
    }
    write!(svg, ">{}</text>", escape_xml(&text.text))
}

fn write_paint(svg: &mut String, attribute: &str, color: Color) -> std::fmt::Result {
    write!(svg, " {attribute}=\"{}\"", color.to_hex_rgb())?;
    if color.alpha < 1.0 {
        write!(svg, " {attribute}-opacity=\"{}\"", num(color.alpha))?;
    }
    Ok(())
}

/// Compact decimal form: at most three fractional digits, no trailing zeros.
fn num(value: f64) -> String {
    let mut formatted = format!("{value:.3}");
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    if formatted == "-0" {
        formatted = "0".to_owned();
    }
    formatted
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, num, render_svg};
    use crate::core::Viewport;
    use crate::render::{Color, RenderFrame, SceneNode, TextAnchor, TextPrimitive};

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(53.5), "53.5");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        let frame = RenderFrame::new(Viewport::new(50.0, 20.0)).with_node(SceneNode::Text(
            TextPrimitive::new("<5>", 1.0, 2.0, 12.0, Color::BLACK, TextAnchor::End)
                .with_rotation(-45.0),
        ));
        let svg = render_svg(&frame).expect("render");
        assert!(svg.contains(">&lt;5&gt;</text>"));
        assert!(svg.contains("transform=\"rotate(-45 1 2)\""));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"50\""));
    }
}
