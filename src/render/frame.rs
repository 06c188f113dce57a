use serde::{Deserialize, Serialize};

use crate::core::ChartGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::{Annotation, GridLine};

pub const HOVER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Everything the host paints for one chart surface.
///
/// `grid` only changes on resize or data replacement. `annotations` is the
/// hover layer and is regenerated wholesale on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverFrame {
    pub geometry: ChartGeometry,
    pub grid: Vec<GridLine>,
    pub annotations: Vec<Annotation>,
}

#[derive(Serialize)]
struct HoverFrameContractRef<'a> {
    schema_version: u32,
    frame: &'a HoverFrame,
}

#[derive(Deserialize)]
struct HoverFrameJsonContractV1 {
    schema_version: u32,
    frame: HoverFrame,
}

impl HoverFrame {
    #[must_use]
    pub fn new(geometry: ChartGeometry) -> Self {
        Self {
            geometry,
            grid: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.geometry.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }
        for line in &self.grid {
            if !line.y.is_finite() || !line.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "grid line must be finite".to_owned(),
                ));
            }
        }
        for annotation in &self.annotations {
            annotation.validate()?;
        }
        Ok(())
    }

    /// True when there is no hover feedback to paint.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = HoverFrameContractRef {
            schema_version: HOVER_FRAME_JSON_SCHEMA_V1,
            frame: self,
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<Self>(input) {
            return Ok(frame);
        }
        let payload: HoverFrameJsonContractV1 = serde_json::from_str(input)?;
        if payload.schema_version != HOVER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported hover frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
