use serde::{Deserialize, Serialize};

use crate::core::nice::{
    aligned_interval, grid_values, max_grid_intervals, nice_domain, select_nice_interval,
};
use crate::core::scale::LinearScale;
use crate::core::types::ChartGeometry;
use crate::error::{ChartError, ChartResult};

/// Tuning for collapsed value extents (`min == max`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    /// Half-span added on each side, relative to `|value|`.
    pub flat_padding_ratio: f64,
    /// Lower bound of the half-span, used for values at or near zero.
    pub flat_min_half_span: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            flat_padding_ratio: 0.10,
            flat_min_half_span: 0.5,
        }
    }
}

impl ValueScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.flat_padding_ratio.is_finite() || self.flat_padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.flat_min_half_span.is_finite() || self.flat_min_half_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale min half-span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    fn expand_flat(self, value: f64) -> (f64, f64) {
        let half = (value.abs() * self.flat_padding_ratio).max(self.flat_min_half_span);
        (value - half, value + half)
    }
}

/// Vertical axis: `[min, max] -> [plot_bottom, plot_top]` with a nice
/// gridline interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
    interval: f64,
    max_grid_intervals: usize,
}

impl ValueScale {
    /// Builds a niceified scale from a data extent or an explicit domain.
    ///
    /// An explicit domain is used verbatim when it is already aligned to a
    /// candidate interval meeting `minimum_ticks`; otherwise it is niceified
    /// like a data extent.
    pub fn fit(
        extent: (f64, f64),
        explicit_domain: Option<(f64, f64)>,
        geometry: ChartGeometry,
        tuning: ValueScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let (mut min, mut max) = explicit_domain.unwrap_or(extent);
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "value domain must be finite".to_owned(),
            ));
        }
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        if min == max {
            (min, max) = tuning.expand_flat(min);
        }

        let minimum_ticks = geometry.minimum_ticks;
        let (domain, interval) = match explicit_domain
            .and_then(|_| aligned_interval(min, max, minimum_ticks))
        {
            Some(interval) => ((min, max), interval),
            None => {
                let interval = select_nice_interval(min, max, minimum_ticks);
                (nice_domain(min, max, interval), interval)
            }
        };

        let linear = LinearScale::new(domain, (geometry.plot_bottom(), geometry.plot_top()))?;
        Ok(Self {
            linear,
            interval,
            max_grid_intervals: max_grid_intervals(minimum_ticks),
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    /// Gridline spacing in value units.
    #[must_use]
    pub fn interval(self) -> f64 {
        self.interval
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain_clamped(pixel)
    }

    /// Gridline values, at most `10 * minimum_ticks` intervals apart.
    #[must_use]
    pub fn grid_values(self) -> Vec<f64> {
        grid_values(self.domain(), self.interval, self.max_grid_intervals)
    }
}
