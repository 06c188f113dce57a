use ordered_float::OrderedFloat;

use crate::core::{ChartScales, HoverSample, SeriesConfig};

/// Resolves the sample nearest in time to `pointer_x` for every non-empty series.
///
/// `pointer_x` is clamped into the plot before inversion. Output follows the
/// series order; empty series contribute nothing.
#[must_use]
pub fn resolve_samples<'a>(
    pointer_x: f64,
    scales: &ChartScales,
    series: impl IntoIterator<Item = &'a SeriesConfig>,
) -> Vec<HoverSample> {
    let target = scales.invert_x(pointer_x);
    series
        .into_iter()
        .filter_map(|config| {
            let point = config.series.nearest(target)?;
            Some(HoverSample {
                series_id: config.id.clone(),
                timestamp: point.timestamp,
                value: point.value,
                screen_x: scales.map_x(point.timestamp),
                screen_y: scales.map_y(point.value),
            })
        })
        .collect()
}

/// The sample whose timestamp lies closest to `target_time`; the first
/// series wins ties.
#[must_use]
pub fn anchor_sample(samples: &[HoverSample], target_time: f64) -> Option<&HoverSample> {
    samples
        .iter()
        .min_by_key(|sample| OrderedFloat((sample.timestamp - target_time).abs()))
}
