pub mod chart_scales;
pub mod nice;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use chart_scales::{ChartScales, ScaleDomain, ScaleTuning};
pub use nice::NICE_INTERVALS;
pub use scale::LinearScale;
pub use series::{SeriesConfig, TimeSeries};
pub use time_scale::TimeScale;
pub use types::{ChartGeometry, HoverSample, Margins, TimePoint};
pub use value_scale::{ValueScale, ValueScaleTuning};
