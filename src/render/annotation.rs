use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Point};

/// Side of the pointer a tooltip box is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipSide {
    Right,
    Left,
}

/// One paint instruction of the hover layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Annotation {
    /// Guide line spanning the plot at the hovered timestamp.
    #[serde(rename_all = "camelCase")]
    VerticalLine { x: f64, y_top: f64, y_bottom: f64 },
    /// Hovered date, centered on `position.x` below the plot.
    DateLabel { position: Point, text: String },
    /// Circle at a resolved sample.
    #[serde(rename_all = "camelCase")]
    Marker {
        series_id: String,
        position: Point,
        radius: f64,
        color: Color,
    },
    /// Labelled box; `position` is the box's top-left corner.
    #[serde(rename_all = "camelCase")]
    Tooltip {
        series_id: String,
        position: Point,
        width: f64,
        height: f64,
        side: TooltipSide,
        text: String,
        color: Color,
    },
}

impl Annotation {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VerticalLine { .. } => "verticalLine",
            Self::DateLabel { .. } => "dateLabel",
            Self::Marker { .. } => "marker",
            Self::Tooltip { .. } => "tooltip",
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = match self {
            Self::VerticalLine { x, y_top, y_bottom } => {
                x.is_finite() && y_top.is_finite() && y_bottom.is_finite()
            }
            Self::DateLabel { position, text } => {
                if text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "date label must not be empty".to_owned(),
                    ));
                }
                position.is_finite()
            }
            Self::Marker {
                position,
                radius,
                color,
                ..
            } => {
                color.validate()?;
                position.is_finite() && radius.is_finite() && *radius > 0.0
            }
            Self::Tooltip {
                position,
                width,
                height,
                color,
                ..
            } => {
                color.validate()?;
                position.is_finite()
                    && width.is_finite()
                    && height.is_finite()
                    && *width > 0.0
                    && *height > 0.0
            }
        };
        if finite {
            Ok(())
        } else {
            Err(ChartError::InvalidData(format!(
                "{} annotation geometry must be finite and positive",
                self.kind()
            )))
        }
    }
}

/// Horizontal gridline of the static layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
    pub label: String,
    /// The zero line, painted dashed.
    #[serde(default)]
    pub baseline: bool,
}
