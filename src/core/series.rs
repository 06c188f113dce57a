use serde::{Deserialize, Serialize};

use crate::core::primitives::{parse_iso8601_timestamp, unix_seconds_to_datetime};
use crate::core::types::TimePoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Time-ordered samples of one series.
///
/// Construction enforces finite values and strictly increasing timestamps so
/// nearest-point lookups can binary search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    points: Vec<TimePoint>,
}

impl TimeSeries {
    pub fn new(points: Vec<TimePoint>) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.timestamp.is_finite() || !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series point {index} must have finite timestamp and value"
                )));
            }
        }
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(ChartError::InvalidData(format!(
                "series timestamps must be strictly increasing (index {})",
                index + 1
            )));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<TimePoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<TimePoint> {
        self.points.last().copied()
    }

    /// `(min, max)` over values, `None` when empty.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, point| match acc {
            None => Some((point.value, point.value)),
            Some((min, max)) => Some((min.min(point.value), max.max(point.value))),
        })
    }

    /// Index of the sample closest in time to `timestamp`.
    ///
    /// Equidistant neighbours resolve to the earlier sample.
    #[must_use]
    pub fn nearest_index(&self, timestamp: f64) -> Option<usize> {
        if self.points.is_empty() || timestamp.is_nan() {
            return None;
        }
        let upper = self.points.partition_point(|p| p.timestamp < timestamp);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.points.len() {
            return Some(upper - 1);
        }
        let before = timestamp - self.points[upper - 1].timestamp;
        let after = self.points[upper].timestamp - timestamp;
        Some(if before <= after { upper - 1 } else { upper })
    }

    #[must_use]
    pub fn nearest(&self, timestamp: f64) -> Option<TimePoint> {
        self.nearest_index(timestamp).map(|index| self.points[index])
    }
}

/// One plotted series as supplied by the page component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesConfigWire", into = "SeriesConfigWire")]
pub struct SeriesConfig {
    pub id: String,
    pub series: TimeSeries,
    /// Caller's color; `None` takes the palette entry for the series slot.
    pub color: Option<Color>,
    pub label: String,
}

impl SeriesConfig {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        series: TimeSeries,
        color: impl Into<Option<Color>>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            series,
            color: color.into(),
            label: label.into(),
        }
    }

    /// Color painted for this series when it sits at `index` in the chart.
    #[must_use]
    pub fn resolved_color(&self, index: usize) -> Color {
        self.color.clone().unwrap_or_else(|| Color::palette(index))
    }
}

/// JSON shape of a series: `{id, data: [{timestamp, value}], color?, label?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeriesConfigWire {
    id: String,
    #[serde(default)]
    data: Vec<TimePointWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimePointWire {
    timestamp: String,
    value: f64,
}

impl TryFrom<SeriesConfigWire> for SeriesConfig {
    type Error = ChartError;

    fn try_from(wire: SeriesConfigWire) -> ChartResult<Self> {
        let points = wire
            .data
            .iter()
            .map(|point| {
                parse_iso8601_timestamp(&point.timestamp)
                    .map(|timestamp| TimePoint::new(timestamp, point.value))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        let series = TimeSeries::new(points)
            .map_err(|err| ChartError::InvalidData(format!("series `{}`: {err}", wire.id)))?;
        let color = wire
            .color
            .as_deref()
            .map(str::trim)
            .filter(|css| !css.is_empty())
            .map(Color::parse);
        let label = wire.label.unwrap_or_else(|| wire.id.clone());
        Ok(Self {
            id: wire.id,
            series,
            color,
            label,
        })
    }
}

impl From<SeriesConfig> for SeriesConfigWire {
    fn from(config: SeriesConfig) -> Self {
        let data = config
            .series
            .points()
            .iter()
            .map(|point| TimePointWire {
                timestamp: unix_seconds_to_datetime(point.timestamp)
                    .map(|time| time.to_rfc3339())
                    .unwrap_or_default(),
                value: point.value,
            })
            .collect();
        Self {
            id: config.id,
            data,
            color: config.color.map(String::from),
            label: Some(config.label),
        }
    }
}
