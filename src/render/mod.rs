mod annotation;
mod frame;
mod null_renderer;
mod primitives;

pub use annotation::{Annotation, GridLine, TooltipSide};
pub use frame::{HOVER_FRAME_JSON_SCHEMA_V1, HoverFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, Point, SERIES_PALETTE};

use crate::error::ChartResult;

/// Contract implemented by the host's painting surface.
///
/// Backends receive a fully materialized `HoverFrame`; they paint from it and
/// nothing else, keeping drawing code out of scale and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &HoverFrame) -> ChartResult<()>;
}
