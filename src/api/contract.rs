use std::collections::HashMap;

use indexmap::IndexMap;

use crate::core::{ChartGeometry, SeriesConfig};
use crate::error::{ChartError, ChartResult};

/// Parses the page component's series array.
///
/// Each element is `{id, data: [{timestamp, value}], color?, label?}`. Colors
/// are any CSS color string; a missing one takes the palette entry for the
/// series position when painted.
pub fn parse_series_json(input: &str) -> ChartResult<Vec<SeriesConfig>> {
    let series: Vec<SeriesConfig> = serde_json::from_str(input)?;
    ensure_unique_series_ids(&series)?;
    Ok(series)
}

/// Parses `{width?, height, margins, minimumTicks}`; a missing width is
/// expected to arrive later through a resize.
pub fn parse_geometry_json(input: &str) -> ChartResult<ChartGeometry> {
    let geometry: ChartGeometry = serde_json::from_str(input)?;
    geometry.validate_dimensions()
}

pub fn ensure_unique_series_ids(series: &[SeriesConfig]) -> ChartResult<()> {
    let mut seen = HashMap::with_capacity(series.len());
    for (index, config) in series.iter().enumerate() {
        if let Some(first) = seen.insert(config.id.as_str(), index) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series id `{}` at positions {first} and {index}",
                config.id
            )));
        }
    }
    Ok(())
}

/// Keys series by id, keeping input order.
pub(super) fn index_series(series: Vec<SeriesConfig>) -> ChartResult<IndexMap<String, SeriesConfig>> {
    ensure_unique_series_ids(&series)?;
    Ok(series
        .into_iter()
        .map(|config| (config.id.clone(), config))
        .collect())
}
