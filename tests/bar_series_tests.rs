use approx::assert_relative_eq;
use bar_chart_kit::core::{
    ChartFrame, Series, map_bar, project_bar_labels, project_bar_tops, project_bars,
};

#[test]
fn three_value_series_produces_increasing_bars() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(vec![10.0, 20.0, 30.0]);

    let bars = project_bars(&series, &frame, 1.0);
    assert_eq!(bars.len(), 3);
    assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
    assert!(bars[2].height > bars[0].height);

    let slot = 236.0 / 3.0;
    assert_relative_eq!(bars[0].x, 80.0, epsilon = 1e-9);
    assert_relative_eq!(bars[1].x, 80.0 + slot, epsilon = 1e-9);
    assert_relative_eq!(bars[2].x, 80.0 + 2.0 * slot, epsilon = 1e-9);
    assert!(bars.iter().all(|bar| bar.width == 32.0));

    assert_relative_eq!(bars[0].height, 0.0, epsilon = 1e-9);
    assert_relative_eq!(bars[1].height, 75.0, epsilon = 1e-9);
    assert_relative_eq!(bars[2].height, 150.0, epsilon = 1e-9);
    assert_relative_eq!(bars[0].y, 166.0, epsilon = 1e-9);
    assert_relative_eq!(bars[1].y, 91.0, epsilon = 1e-9);
    assert_relative_eq!(bars[2].y, 16.0, epsilon = 1e-9);
}

#[test]
fn empty_series_produces_no_geometry() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(Vec::new());

    assert!(project_bars(&series, &frame, 1.0).is_empty());
    assert!(project_bar_tops(&series, &frame, 1.0).is_empty());
    assert!(project_bar_labels(&series, &frame, 1.0).is_empty());
    assert_eq!(map_bar(&series, &frame, 0, 1.0), None);
}

#[test]
fn negative_values_hang_below_the_baseline() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(vec![-10.0, 0.0, 30.0]);

    let bars = project_bars(&series, &frame, 1.0);
    let baseline_y = 150.0 * 0.75 + 16.0;

    assert_relative_eq!(bars[0].y, baseline_y, epsilon = 1e-9);
    assert_relative_eq!(bars[0].height, 37.5, epsilon = 1e-9);

    assert_relative_eq!(bars[1].y, baseline_y, epsilon = 1e-9);
    assert_relative_eq!(bars[1].height, 0.0, epsilon = 1e-9);

    assert_relative_eq!(bars[2].y, 16.0, epsilon = 1e-9);
    assert_relative_eq!(bars[2].bottom(), baseline_y, epsilon = 1e-9);
}

#[test]
fn all_negative_series_grows_down_from_the_top() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(vec![-40.0, -10.0]);

    let bars = project_bars(&series, &frame, 1.0);
    assert_relative_eq!(bars[0].y, 16.0, epsilon = 1e-9);
    assert_relative_eq!(bars[0].height, 150.0, epsilon = 1e-9);
    assert_relative_eq!(bars[1].y, 16.0, epsilon = 1e-9);
    assert_relative_eq!(bars[1].height, 0.0, epsilon = 1e-9);
}

#[test]
fn bar_percentage_keeps_the_midpoint() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(vec![3.0, 6.0]);

    let full = project_bars(&series, &frame, 1.0);
    let half = project_bars(&series, &frame, 0.5);
    for (full, half) in full.iter().zip(&half) {
        assert_relative_eq!(half.width, full.width * 0.5, epsilon = 1e-9);
        assert_relative_eq!(half.center_x(), full.center_x(), epsilon = 1e-9);
        assert_relative_eq!(half.y, full.y, epsilon = 1e-9);
        assert_relative_eq!(half.height, full.height, epsilon = 1e-9);
    }
}

#[test]
fn y_max_lowers_every_bar() {
    let frame = ChartFrame::new(300.0, 200.0);
    let plain = Series::new(vec![0.0, 50.0]);
    let capped = plain.clone().with_y_max(Some(100.0));

    let plain_bars = project_bars(&plain, &frame, 1.0);
    let capped_bars = project_bars(&capped, &frame, 1.0);
    assert_eq!(capped_bars.len(), 2);
    assert_relative_eq!(plain_bars[1].height, 150.0, epsilon = 1e-9);
    assert_relative_eq!(capped_bars[1].height, 75.0, epsilon = 1e-9);
}

#[test]
fn from_zero_keeps_the_smallest_positive_bar_visible() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(vec![10.0, 40.0]).with_from_zero(true);

    let bars = project_bars(&series, &frame, 1.0);
    assert_relative_eq!(bars[0].height, 37.5, epsilon = 1e-9);
    assert_relative_eq!(bars[1].height, 150.0, epsilon = 1e-9);
}

#[test]
fn bar_tops_and_labels_share_bar_columns() {
    let frame = ChartFrame::new(300.0, 200.0);
    let series = Series::new(vec![10.0, 20.0, 30.0]);

    let bars = project_bars(&series, &frame, 0.8);
    let tops = project_bar_tops(&series, &frame, 0.8);
    let labels = project_bar_labels(&series, &frame, 0.8);

    for ((bar, top), label) in bars.iter().zip(&tops).zip(&labels) {
        assert_relative_eq!(top.x, bar.x, epsilon = 1e-9);
        assert_relative_eq!(top.width, bar.width, epsilon = 1e-9);
        assert_relative_eq!(top.y, bar.y, epsilon = 1e-9);
        assert_eq!(top.height, 2.0);
        assert_relative_eq!(label.x, bar.x, epsilon = 1e-9);
        assert_relative_eq!(label.y, bar.y - 5.0, epsilon = 1e-9);
        assert_eq!(label.value, bar.value);
    }
}

#[test]
fn mapping_is_idempotent() {
    let frame = ChartFrame::new(480.0, 320.0).with_padding(8.0, 40.0);
    let series = Series::new(vec![2.5, -1.0, 7.0, 0.0]);

    assert_eq!(
        project_bars(&series, &frame, 0.7),
        project_bars(&series, &frame, 0.7)
    );
    assert_eq!(map_bar(&series, &frame, 2, 0.7), map_bar(&series, &frame, 2, 0.7));
}
