use tracing::{debug, trace};

use crate::interaction::{DrainTicket, HoverState, PointerEvent};
use crate::render::{Annotation, Renderer};

use super::{HoverController, LayoutContext, layout_hover, resolve_samples};

impl<R: Renderer> HoverController<R> {
    /// Feeds one host pointer event.
    ///
    /// Enter and move events are buffered; the returned ticket, if any, must
    /// be handed to [`Self::drain`] from the host's deferred-callback
    /// primitive. Leave clears the hover layer synchronously and invalidates
    /// every outstanding ticket.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Option<DrainTicket> {
        match event {
            PointerEvent::Enter { x, time_ms, .. } | PointerEvent::Move { x, time_ms, .. } => {
                if self.state == HoverState::Idle {
                    debug!(x, "hover state: idle -> hovering");
                    self.state = HoverState::Hovering;
                }
                self.coalescer.submit(x, time_ms)
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                None
            }
        }
    }

    /// Runs one drain step: renders the most recent buffered position.
    ///
    /// Returns the ticket for the next step while samples remain. Stale
    /// tickets (from before a leave, resize or data change) do nothing.
    pub fn drain(&mut self, ticket: DrainTicket) -> Option<DrainTicket> {
        let sample = self.coalescer.take(ticket)?;
        trace!(
            x = sample.pixel_x,
            seq = sample.seq,
            backlog = self.coalescer.len(),
            "drain pointer sample"
        );
        self.frame.annotations = self.annotate_at(sample.pixel_x);
        self.publish();
        self.coalescer.finish_step(ticket)
    }

    /// Hover annotations for a pointer at `pixel_x` against the current
    /// scales, without touching the published frame.
    #[must_use]
    pub fn annotate_at(&self, pixel_x: f64) -> Vec<Annotation> {
        let Some(scales) = self.scales.as_ref() else {
            return Vec::new();
        };
        let samples = resolve_samples(pixel_x, scales, self.series.values());
        layout_hover(
            LayoutContext {
                scales,
                series: &self.series,
                config: &self.config.tooltip,
                labels: &self.config.labels,
            },
            pixel_x,
            &samples,
        )
    }

    fn pointer_leave(&mut self) {
        let dropped = self.coalescer.len();
        self.coalescer.cancel();
        if self.state == HoverState::Hovering {
            debug!(dropped, "hover state: hovering -> idle");
        }
        self.state = HoverState::Idle;
        self.frame.annotations.clear();
        self.publish();
    }
}
