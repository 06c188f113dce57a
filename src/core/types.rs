use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Outer spacing between the container edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(left: f64, top: f64, bottom: f64, right: f64) -> Self {
        Self {
            left,
            top,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 20.0, 30.0, 20.0)
    }
}

/// Container geometry of one chart surface.
///
/// `width` usually arrives from the host's resize notifications while the
/// rest comes from the page component, so it defaults to zero when absent
/// from a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartGeometry {
    #[serde(default)]
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_minimum_ticks")]
    pub minimum_ticks: usize,
}

fn default_minimum_ticks() -> usize {
    4
}

impl ChartGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
            minimum_ticks: default_minimum_ticks(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_minimum_ticks(mut self, minimum_ticks: usize) -> Self {
        self.minimum_ticks = minimum_ticks;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.width - self.margins.right
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.height - self.margins.bottom
    }

    /// True when every dimension is finite and non-negative. The plot area
    /// may still be empty, e.g. before the first resize.
    #[must_use]
    pub fn has_finite_dimensions(self) -> bool {
        let m = self.margins;
        [self.width, self.height, m.left, m.top, m.bottom, m.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// True when every dimension is finite and the plot area is non-empty.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.has_finite_dimensions()
            && self.plot_right() > self.plot_left()
            && self.plot_bottom() > self.plot_top()
    }

    /// Rejects non-finite or negative dimensions only.
    pub fn validate_dimensions(self) -> ChartResult<Self> {
        if !self.has_finite_dimensions() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Clamps a pointer pixel into the horizontal plot range.
    #[must_use]
    pub fn clamp_x(self, pixel_x: f64) -> f64 {
        if pixel_x.is_nan() {
            return self.plot_left();
        }
        pixel_x.clamp(self.plot_left(), self.plot_right().max(self.plot_left()))
    }
}

/// One `{timestamp, value}` sample; `timestamp` is Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub timestamp: f64,
    pub value: f64,
}

impl TimePoint {
    #[must_use]
    pub const fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self::new(datetime_to_unix_seconds(time), value)
    }

    /// Builds a point from a decimal-valued feed (e.g. cumulative PnL).
    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(value, "value")?,
        ))
    }
}

/// Per-series result of resolving one pointer position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverSample {
    pub series_id: String,
    pub timestamp: f64,
    pub value: f64,
    pub screen_x: f64,
    pub screen_y: f64,
}
