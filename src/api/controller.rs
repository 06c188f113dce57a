use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{ChartGeometry, ChartScales, SeriesConfig};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, PointerCoalescer};
use crate::render::{Annotation, GridLine, HoverFrame, Renderer};

use super::contract::index_series;
use super::{HoverConfig, grid_lines};

/// Per-chart hover session.
///
/// Owns the series snapshot, the current scales, the pointer queue and the
/// last published frame. Several controllers can live side by side, one per
/// chart surface; none of them share state.
pub struct HoverController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: HoverConfig,
    pub(super) series: IndexMap<String, SeriesConfig>,
    pub(super) scales: Option<ChartScales>,
    pub(super) state: HoverState,
    pub(super) coalescer: PointerCoalescer,
    pub(super) frame: HoverFrame,
}

impl<R: Renderer> HoverController<R> {
    /// Validates `config` and publishes the initial empty frame.
    pub fn new(renderer: R, config: HoverConfig) -> ChartResult<Self> {
        config.validate()?;
        let coalescer = PointerCoalescer::new(config.coalescer);
        let mut controller = Self {
            renderer,
            frame: HoverFrame::new(config.geometry),
            config,
            series: IndexMap::new(),
            scales: None,
            state: HoverState::Idle,
            coalescer,
        };
        controller.invalidate("mount");
        Ok(controller)
    }

    /// Replaces every series. Hover state resets and scales are rebuilt
    /// before the next pointer tick.
    pub fn set_series(&mut self, series: Vec<SeriesConfig>) -> ChartResult<()> {
        let series = index_series(series)?;
        debug!(
            series = series.len(),
            points = series.values().map(|config| config.series.len()).sum::<usize>(),
            "replace series"
        );
        self.series = series;
        self.invalidate("data");
        Ok(())
    }

    /// Applies a new container width.
    ///
    /// A width too small for the margins is accepted; the chart then has no
    /// scales and publishes nothing until it grows again.
    pub fn resize(&mut self, width: f64) -> ChartResult<()> {
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::InvalidViewport {
                width,
                height: self.config.geometry.height,
            });
        }
        trace!(from = self.config.geometry.width, to = width, "resize");
        self.config.geometry = self.config.geometry.with_width(width);
        self.invalidate("resize");
        Ok(())
    }

    /// Pins or releases the value axis.
    pub fn set_y_domain(&mut self, y_domain: Option<(f64, f64)>) -> ChartResult<()> {
        if let Some((min, max)) = y_domain {
            if !min.is_finite() || !max.is_finite() {
                return Err(ChartError::InvalidData(
                    "explicit y domain must be finite".to_owned(),
                ));
            }
        }
        self.config.y_domain = y_domain;
        self.invalidate("y-domain");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.config.geometry
    }

    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn scales(&self) -> Option<ChartScales> {
        self.scales
    }

    #[must_use]
    pub fn series(&self) -> &IndexMap<String, SeriesConfig> {
        &self.series
    }

    /// Last published frame.
    #[must_use]
    pub fn frame(&self) -> &HoverFrame {
        &self.frame
    }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.frame.annotations
    }

    #[must_use]
    pub fn grid(&self) -> &[GridLine] {
        &self.frame.grid
    }

    /// Pointer samples still waiting for a drain step.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.coalescer.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Drops hover state, cancels pending drains and rebuilds the scales.
    pub(super) fn invalidate(&mut self, reason: &'static str) {
        self.coalescer.cancel();
        if self.state == HoverState::Hovering {
            debug!(reason, "hover state: hovering -> idle");
        }
        self.state = HoverState::Idle;

        let series: Vec<&SeriesConfig> = self.series.values().collect();
        self.scales = ChartScales::build(
            &series,
            self.config.geometry,
            self.config.y_domain,
            self.config.scale_tuning,
        );
        self.frame = HoverFrame {
            geometry: self.config.geometry,
            grid: self
                .scales
                .as_ref()
                .map(|scales| grid_lines(scales, &self.config.labels))
                .unwrap_or_default(),
            annotations: Vec::new(),
        };
        debug!(
            reason,
            has_scales = self.scales.is_some(),
            grid = self.frame.grid.len(),
            "chart invalidated"
        );
        self.publish();
    }

    /// Hands the current frame to the renderer.
    ///
    /// Render failures are logged; the frame stays published so accessors
    /// still reflect it.
    pub(super) fn publish(&mut self) {
        if !self.frame.geometry.is_valid() {
            trace!(
                width = self.frame.geometry.width,
                "plot area collapsed; skipping paint"
            );
            return;
        }
        if let Err(err) = self.renderer.render(&self.frame) {
            warn!(error = %err, "renderer rejected hover frame");
        }
    }
}
