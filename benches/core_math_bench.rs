use bar_chart_kit::api::{BarChart, BarChartConfig};
use bar_chart_kit::core::{ChartFrame, Series, project_bars, value_label_slots};
use bar_chart_kit::render::{NullRenderer, render_svg};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_values(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            (t * 0.37).sin() * 250.0 + t * 0.01
        })
        .collect()
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let frame = ChartFrame::new(1920.0, 1080.0);
    let series = Series::new(generated_values(10_000));

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let _ = project_bars(black_box(&series), black_box(&frame), black_box(0.8));
        })
    });
}

fn bench_value_label_slots(c: &mut Criterion) {
    let frame = ChartFrame::new(1920.0, 1080.0);
    let values = generated_values(10_000);

    c.bench_function("value_label_slots_10k", |b| {
        b.iter(|| {
            let _ = value_label_slots(
                black_box(&values),
                black_box(&frame),
                black_box(8),
                black_box(false),
                black_box(12.0),
            );
        })
    });
}

fn bench_render_frame_and_svg_2k(c: &mut Criterion) {
    let values = generated_values(2_000);
    let labels: Vec<String> = (0..values.len()).map(|i| format!("#{i}")).collect();
    let config = BarChartConfig::new(1600.0, 900.0, values).with_labels(labels);
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");

    c.bench_function("build_render_frame_2k", |b| {
        b.iter(|| {
            let _ = chart.build_render_frame().expect("frame");
        })
    });

    let frame = chart.build_render_frame().expect("frame");
    c.bench_function("render_svg_2k", |b| {
        b.iter(|| {
            let _ = render_svg(black_box(&frame)).expect("svg");
        })
    });
}

criterion_group!(
    benches,
    bench_bar_projection_10k,
    bench_value_label_slots,
    bench_render_frame_and_svg_2k
);
criterion_main!(benches);
