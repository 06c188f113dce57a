use approx::assert_abs_diff_eq;
use chart_hover::core::nice::{
    NICE_INTERVALS, grid_values, max_grid_intervals, nice_domain, select_nice_interval,
};
use chart_hover::core::{
    ChartGeometry, ChartScales, Margins, ScaleTuning, SeriesConfig, TimePoint, TimeSeries,
};
use chart_hover::render::Color;

fn geometry() -> ChartGeometry {
    ChartGeometry::new(640.0, 320.0)
        .with_margins(Margins::new(40.0, 20.0, 30.0, 20.0))
        .with_minimum_ticks(4)
}

fn config(points: &[(f64, f64)]) -> SeriesConfig {
    SeriesConfig::new(
        "s",
        TimeSeries::new(points.iter().map(|(t, v)| TimePoint::new(*t, *v)).collect())
            .expect("series"),
        Color::rgb(0.0, 0.0, 0.0),
        "S",
    )
}

fn build(points: &[(f64, f64)], y_domain: Option<(f64, f64)>) -> ChartScales {
    ChartScales::build(&[&config(points)], geometry(), y_domain, ScaleTuning::default())
        .expect("scales")
}

#[test]
fn probability_range_niceifies_to_five_hundredths() {
    let scales = build(&[(0.0, 0.12), (1.0, 0.34)], None);
    let value_scale = scales.value_scale();
    assert_abs_diff_eq!(value_scale.interval(), 0.05);
    let (low, high) = value_scale.domain();
    assert_abs_diff_eq!(low, 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(high, 0.35, epsilon = 1e-12);
    assert_eq!(value_scale.grid_values().len(), 6);
}

#[test]
fn nice_domain_always_contains_data_with_enough_intervals() {
    for (min, max) in [(0.12, 0.34), (-3.2, 7.9), (1_200.0, 1_950.0), (0.001, 0.009)] {
        let interval = select_nice_interval(min, max, 4);
        assert!(NICE_INTERVALS.contains(&interval));
        let (low, high) = nice_domain(min, max, interval);
        assert!(low <= min && high >= max, "{min}..{max} -> {low}..{high}");
        assert!(grid_values((low, high), interval, max_grid_intervals(4)).len() > 4);
    }
}

#[test]
fn flat_series_gets_a_synthetic_value_span() {
    let scales = build(&[(0.0, 0.5), (10.0, 0.5)], None);
    let (low, high) = scales.value_scale().domain();
    assert!(low < 0.5 && high > 0.5);
    assert_abs_diff_eq!(low, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(high, 1.0, epsilon = 1e-12);
}

#[test]
fn single_timestamp_gets_a_synthetic_time_span() {
    let scales = build(&[(86_400.0, 2.0)], None);
    let (start, end) = scales.time_scale().domain();
    assert!(end > start);
    assert_abs_diff_eq!(scales.map_x(86_400.0), 330.0, epsilon = 1e-9);
}

#[test]
fn aligned_explicit_domain_is_used_verbatim() {
    let scales = build(&[(0.0, 0.12), (1.0, 0.34)], Some((0.0, 1.0)));
    assert_eq!(scales.value_scale().domain(), (0.0, 1.0));
    assert_abs_diff_eq!(scales.map_y(1.0), 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scales.map_y(0.0), 290.0, epsilon = 1e-9);
}

#[test]
fn unaligned_explicit_domain_is_niceified() {
    let scales = build(&[(0.0, 0.2)], Some((0.1234, 0.3456)));
    let (low, high) = scales.value_scale().domain();
    assert!(low <= 0.1234 && high >= 0.3456);
    assert_ne!((low, high), (0.1234, 0.3456));
}

#[test]
fn pointer_outside_plot_is_clamped_when_inverted() {
    let scales = build(&[(100.0, 1.0), (200.0, 2.0)], None);
    assert_abs_diff_eq!(scales.invert_x(-50.0), 100.0);
    assert_abs_diff_eq!(scales.invert_x(10_000.0), 200.0);
    assert_abs_diff_eq!(scales.invert_x(scales.map_x(150.0)), 150.0, epsilon = 1e-9);
}
