mod contract;
mod controller;
mod deferred;
mod grid_lines;
mod hover_config;
mod label_format;
mod pointer_controller;
mod resolver;
mod tooltip_layout;

pub use contract::{ensure_unique_series_ids, parse_geometry_json, parse_series_json};
pub use controller::HoverController;
pub use deferred::DeferredQueue;
pub use grid_lines::grid_lines;
pub use hover_config::{HoverConfig, TooltipLayoutConfig};
pub use label_format::{LabelFormat, ValueFormat};
pub use resolver::{anchor_sample, resolve_samples};
pub use tooltip_layout::{LayoutContext, layout_hover, stack_box_centers, tooltip_side};
