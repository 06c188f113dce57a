use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, normalize_range};
use crate::core::types::ChartGeometry;
use crate::error::{ChartError, ChartResult};

/// Horizontal axis: `[first timestamp, last timestamp] -> [plot_left, plot_right]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Fits the scale to a timestamp extent.
    ///
    /// A single-instant extent is widened to `min_span_secs` around it.
    pub fn from_extent(
        start: f64,
        end: f64,
        geometry: ChartGeometry,
        min_span_secs: f64,
    ) -> ChartResult<Self> {
        if !min_span_secs.is_finite() || min_span_secs <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale min span must be finite and > 0".to_owned(),
            ));
        }
        let domain = normalize_range(start, end, min_span_secs)?;
        let linear = LinearScale::new(domain, (geometry.plot_left(), geometry.plot_right()))?;
        Ok(Self { linear })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn time_to_pixel(self, timestamp: f64) -> f64 {
        self.linear.domain_to_pixel(timestamp)
    }

    /// Inverts a pointer pixel, clamping it to the plot range first.
    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain_clamped(pixel)
    }
}
