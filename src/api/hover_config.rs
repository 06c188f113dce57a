use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, ScaleTuning};
use crate::error::{ChartError, ChartResult};
use crate::interaction::CoalescerConfig;

use super::LabelFormat;

/// Box and marker geometry of the hover layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipLayoutConfig {
    pub box_height_px: f64,
    /// Minimum vertical gap between stacked boxes.
    pub gap_px: f64,
    /// Width assumed for every box when deciding which side to draw on.
    pub box_width_px: f64,
    /// Horizontal distance between the pointer and the box edge.
    pub offset_x_px: f64,
    pub marker_radius_px: f64,
    /// Distance of the date label below the plot's bottom edge.
    pub date_label_offset_px: f64,
}

impl Default for TooltipLayoutConfig {
    fn default() -> Self {
        Self {
            box_height_px: 24.0,
            gap_px: 2.0,
            box_width_px: 120.0,
            offset_x_px: 8.0,
            marker_radius_px: 4.0,
            date_label_offset_px: 16.0,
        }
    }
}

impl TooltipLayoutConfig {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("box height", self.box_height_px),
            ("box width", self.box_width_px),
            ("marker radius", self.marker_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "tooltip {name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("gap", self.gap_px),
            ("horizontal offset", self.offset_x_px),
            ("date label offset", self.date_label_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "tooltip {name} must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Bootstrap configuration of one hover controller.
///
/// Serializable so page components can ship chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverConfig {
    pub geometry: ChartGeometry,
    #[serde(default)]
    pub y_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub scale_tuning: ScaleTuning,
    #[serde(default)]
    pub coalescer: CoalescerConfig,
    #[serde(default)]
    pub tooltip: TooltipLayoutConfig,
    #[serde(default)]
    pub labels: LabelFormat,
}

impl HoverConfig {
    #[must_use]
    pub fn new(geometry: ChartGeometry) -> Self {
        Self {
            geometry,
            y_domain: None,
            scale_tuning: ScaleTuning::default(),
            coalescer: CoalescerConfig::default(),
            tooltip: TooltipLayoutConfig::default(),
            labels: LabelFormat::default(),
        }
    }

    /// Pins the value axis instead of fitting it to the data.
    #[must_use]
    pub fn with_y_domain(mut self, min: f64, max: f64) -> Self {
        self.y_domain = Some((min, max));
        self
    }

    #[must_use]
    pub fn with_coalescer(mut self, coalescer: CoalescerConfig) -> Self {
        self.coalescer = coalescer;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipLayoutConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelFormat) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_scale_tuning(mut self, scale_tuning: ScaleTuning) -> Self {
        self.scale_tuning = scale_tuning;
        self
    }

    /// Checks every section. The geometry only has to be finite and
    /// non-negative: a collapsed plot area (width 0 until the first resize)
    /// is allowed and simply yields no scales.
    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate_dimensions()?;
        if let Some((min, max)) = self.y_domain {
            if !min.is_finite() || !max.is_finite() {
                return Err(ChartError::InvalidData(
                    "explicit y domain must be finite".to_owned(),
                ));
            }
        }
        self.scale_tuning.validate()?;
        self.coalescer.validate()?;
        self.tooltip.validate()?;
        self.labels.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}
