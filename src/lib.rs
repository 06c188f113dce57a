//! chart-hover: hover and scaling engine for interactive time-series charts.
//!
//! Given time-indexed series and a pointer position, the engine produces a
//! deterministic list of annotations (guide line, date label, markers and
//! stacked tooltips) plus a niceified gridline set. Painting is left to a
//! [`render::Renderer`] supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{HoverConfig, HoverController};
pub use error::{ChartError, ChartResult};
