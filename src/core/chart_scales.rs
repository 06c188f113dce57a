use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::series::SeriesConfig;
use crate::core::time_scale::TimeScale;
use crate::core::types::ChartGeometry;
use crate::core::value_scale::{ValueScale, ValueScaleTuning};
use crate::error::{ChartError, ChartResult};

/// Inputs to a scale rebuild besides the series themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    /// Span substituted when every sample shares one timestamp.
    pub min_time_span_secs: f64,
    pub value: ValueScaleTuning,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            min_time_span_secs: 86_400.0,
            value: ValueScaleTuning::default(),
        }
    }
}

impl ScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_time_span_secs.is_finite() || self.min_time_span_secs <= 0.0 {
            return Err(ChartError::InvalidData(
                "min time span must be finite and > 0".to_owned(),
            ));
        }
        self.value.validate()?;
        Ok(self)
    }
}

/// Time and value domains of a built scale pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDomain {
    pub time: (f64, f64),
    pub value: (f64, f64),
}

/// Immutable coordinate mapping for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    geometry: ChartGeometry,
    time: TimeScale,
    value: ValueScale,
}

impl ChartScales {
    /// Builds scales from the union of all series.
    ///
    /// Returns `None` when there is nothing to plot (no series, only empty
    /// series, or a geometry without a plot area). Callers must not resolve
    /// or lay out hover state against a missing scale.
    #[must_use]
    pub fn build(
        series: &[&SeriesConfig],
        geometry: ChartGeometry,
        y_domain: Option<(f64, f64)>,
        tuning: ScaleTuning,
    ) -> Option<Self> {
        match Self::try_build(series, geometry, y_domain, tuning) {
            Ok(scales) => scales,
            Err(err) => {
                warn!(error = %err, "scale rebuild failed; treating chart as empty");
                None
            }
        }
    }

    fn try_build(
        series: &[&SeriesConfig],
        geometry: ChartGeometry,
        y_domain: Option<(f64, f64)>,
        tuning: ScaleTuning,
    ) -> ChartResult<Option<Self>> {
        let tuning = tuning.validate()?;
        if !geometry.is_valid() {
            return Ok(None);
        }

        let mut time_extent: Option<(f64, f64)> = None;
        let mut value_extent: Option<(f64, f64)> = None;
        for config in series {
            let (Some(first), Some(last), Some((low, high))) = (
                config.series.first(),
                config.series.last(),
                config.series.value_extent(),
            ) else {
                continue;
            };
            time_extent = Some(match time_extent {
                None => (first.timestamp, last.timestamp),
                Some((start, end)) => (start.min(first.timestamp), end.max(last.timestamp)),
            });
            value_extent = Some(match value_extent {
                None => (low, high),
                Some((min, max)) => (min.min(low), max.max(high)),
            });
        }

        let (Some((start, end)), Some(extent)) = (time_extent, value_extent) else {
            debug!(series = series.len(), "no samples; scales left unset");
            return Ok(None);
        };

        let time = TimeScale::from_extent(start, end, geometry, tuning.min_time_span_secs)?;
        let value = ValueScale::fit(extent, y_domain, geometry, tuning.value)?;
        debug!(
            time_domain = ?time.domain(),
            value_domain = ?value.domain(),
            interval = value.interval(),
            width = geometry.width,
            "rebuilt chart scales"
        );
        Ok(Some(Self {
            geometry,
            time,
            value,
        }))
    }

    #[must_use]
    pub fn geometry(self) -> ChartGeometry {
        self.geometry
    }

    #[must_use]
    pub fn time_scale(self) -> TimeScale {
        self.time
    }

    #[must_use]
    pub fn value_scale(self) -> ValueScale {
        self.value
    }

    #[must_use]
    pub fn map_x(self, timestamp: f64) -> f64 {
        self.time.time_to_pixel(timestamp)
    }

    #[must_use]
    pub fn map_y(self, value: f64) -> f64 {
        self.value.value_to_pixel(value)
    }

    /// Pointer pixel to timestamp; out-of-plot pixels are clamped.
    #[must_use]
    pub fn invert_x(self, pixel_x: f64) -> f64 {
        self.time.pixel_to_time(pixel_x)
    }

    #[must_use]
    pub fn domain(self) -> ScaleDomain {
        ScaleDomain {
            time: self.time.domain(),
            value: self.value.domain(),
        }
    }
}
