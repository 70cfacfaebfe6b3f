use bar_chart_kit::api::{BarChart, BarChartConfig};
use bar_chart_kit::render::{Renderer, SvgRenderer, render_svg};

fn render_document(config: BarChartConfig) -> String {
    let mut chart = BarChart::new(SvgRenderer::new(), config).expect("chart init");
    chart.render().expect("render");
    chart
        .renderer_mut()
        .take_document()
        .expect("svg document")
}

#[test]
fn document_declares_both_gradients_before_painting() {
    let svg = render_document(
        BarChartConfig::new(300.0, 200.0, vec![10.0, 20.0, 30.0]).with_labels(["a", "b", "c"]),
    );

    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"200\" viewBox=\"0 0 300 200\">"
    ));
    assert!(svg.ends_with("</svg>"));

    let defs = svg.find("<defs>").expect("defs");
    let first_group = svg.find("<g class=").expect("group");
    assert!(defs < first_group);
    assert!(svg.contains("<linearGradient id=\"backgroundGradient\""));
    assert!(svg.contains("<linearGradient id=\"fillShadowGradient\""));
}

#[test]
fn layers_are_written_in_paint_order() {
    let svg = render_document(BarChartConfig::new(300.0, 200.0, vec![1.0, 2.0]));

    let positions: Vec<usize> = [
        "background",
        "grid",
        "horizontal-labels",
        "vertical-labels",
        "bars",
        "bar-tops",
        "bar-text",
    ]
    .iter()
    .map(|class| {
        svg.find(&format!("<g class=\"{class}\">"))
            .unwrap_or_else(|| panic!("missing layer {class}"))
    })
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn bars_reference_fill_shadow_gradient_and_gridlines_are_dashed() {
    let svg = render_document(
        BarChartConfig::new(300.0, 200.0, vec![10.0, 20.0, 30.0]).with_bar_radius(3.0),
    );

    assert_eq!(svg.matches("fill=\"url(#fillShadowGradient)\"").count(), 3);
    assert_eq!(svg.matches("fill=\"url(#backgroundGradient)\"").count(), 1);
    assert_eq!(svg.matches("stroke-dasharray=\"5, 10\"").count(), 4);
    assert!(svg.contains("<rect x=\"237.333\" y=\"16\" width=\"32\" height=\"150\" rx=\"3\" ry=\"3\""));
}

#[test]
fn label_text_is_escaped() {
    let svg = render_document(
        BarChartConfig::new(300.0, 200.0, vec![1.0]).with_labels(["<Q1 & Q2>"]),
    );
    assert!(svg.contains(">&lt;Q1 &amp; Q2&gt;</text>"));
}

#[test]
fn failed_render_keeps_previous_document_untouched() {
    let mut renderer = SvgRenderer::new();
    assert_eq!(renderer.backend_name(), "svg");
    assert!(renderer.last_document().is_none());

    let chart = BarChart::new(
        SvgRenderer::new(),
        BarChartConfig::new(120.0, 80.0, vec![4.0]),
    )
    .expect("chart init");
    let frame = chart.build_render_frame().expect("build frame");
    renderer.render(&frame).expect("render");
    let document = renderer.last_document().expect("document").to_owned();
    assert_eq!(document, render_svg(&frame).expect("render svg"));

    let mut broken = frame.clone();
    broken.defs.clear();
    assert!(renderer.render(&broken).is_err());
    assert_eq!(renderer.last_document(), Some(document.as_str()));
}
