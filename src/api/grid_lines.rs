use crate::core::ChartScales;
use crate::render::GridLine;

use super::LabelFormat;

/// Horizontal gridlines across the value domain, bottom to top.
///
/// When zero lies inside the domain it always gets a line flagged as the
/// baseline, even if a strided grid would skip it.
#[must_use]
pub fn grid_lines(scales: &ChartScales, labels: &LabelFormat) -> Vec<GridLine> {
    let value_scale = scales.value_scale();
    let (low, high) = value_scale.domain();
    let mut values = value_scale.grid_values();
    if low <= 0.0 && high >= 0.0 && !values.contains(&0.0) {
        let at = values.partition_point(|value| *value < 0.0);
        values.insert(at, 0.0);
    }
    values
        .into_iter()
        .map(|value| GridLine {
            value,
            y: value_scale.value_to_pixel(value),
            label: labels.format_value(value),
            baseline: value == 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{ChartGeometry, Margins, ScaleTuning, SeriesConfig, TimePoint, TimeSeries};
    use crate::render::Color;

    fn scales_for(values: &[f64]) -> ChartScales {
        let points = values
            .iter()
            .enumerate()
            .map(|(index, value)| TimePoint::new(index as f64, *value))
            .collect();
        let series = SeriesConfig::new(
            "a",
            TimeSeries::new(points).expect("series"),
            Color::rgb(0.0, 0.0, 0.0),
            "A",
        );
        let geometry =
            ChartGeometry::new(400.0, 240.0).with_margins(Margins::new(40.0, 20.0, 20.0, 20.0));
        ChartScales::build(&[&series], geometry, None, ScaleTuning::default()).expect("scales")
    }

    #[test]
    fn gridlines_span_the_domain_bottom_to_top() {
        let lines = grid_lines(&scales_for(&[0.12, 0.34]), &LabelFormat::default());
        let labels: Vec<&str> = lines.iter().map(|line| line.label.as_str()).collect();
        assert_eq!(labels, vec!["0.10", "0.15", "0.20", "0.25", "0.30", "0.35"]);
        assert_abs_diff_eq!(lines[0].y, 220.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lines[5].y, 20.0, epsilon = 1e-9);
        assert!(lines.iter().all(|line| !line.baseline));
    }

    #[test]
    fn zero_crossing_domain_flags_one_baseline() {
        let lines = grid_lines(&scales_for(&[-0.3, 0.5]), &LabelFormat::default());
        let baselines: Vec<&GridLine> = lines.iter().filter(|line| line.baseline).collect();
        assert_eq!(baselines.len(), 1);
        assert_eq!(baselines[0].value, 0.0);
        assert_eq!(baselines[0].label, "0.00");
    }

    #[test]
    fn strided_grid_still_gets_a_zero_baseline() {
        let lines = grid_lines(&scales_for(&[-5_000.0, 1e12]), &LabelFormat::default());
        assert!(lines.len() <= 43, "{} gridlines", lines.len());
        let zero = lines
            .iter()
            .position(|line| line.baseline)
            .expect("baseline inserted");
        assert_eq!(lines[zero].value, 0.0);
        assert!(lines[zero - 1].value < 0.0 && lines[zero + 1].value > 0.0);
        assert!(lines.windows(2).all(|pair| pair[0].y > pair[1].y));
    }
}
