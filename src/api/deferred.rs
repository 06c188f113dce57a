use std::collections::VecDeque;

use tracing::trace;

use crate::interaction::DrainTicket;
use crate::render::Renderer;

use super::HoverController;

/// FIFO of scheduled drain steps for headless hosts.
///
/// Stands in for the host's deferred-callback primitive: tickets returned by
/// [`HoverController::on_pointer_event`] and [`HoverController::drain`] are
/// queued here and run one per turn.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: VecDeque<DrainTicket>,
}

impl DeferredQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, ticket: Option<DrainTicket>) {
        if let Some(ticket) = ticket {
            self.pending.push_back(ticket);
        }
    }

    pub fn pop(&mut self) -> Option<DrainTicket> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Runs a single deferred step. Returns `false` when nothing was pending.
    pub fn run_next<R: Renderer>(&mut self, controller: &mut HoverController<R>) -> bool {
        let Some(ticket) = self.pop() else {
            return false;
        };
        let next = controller.drain(ticket);
        self.schedule(next);
        true
    }

    /// Runs deferred steps until none remain; returns how many ran.
    pub fn run_until_idle<R: Renderer>(&mut self, controller: &mut HoverController<R>) -> usize {
        let mut steps = 0;
        while self.run_next(controller) {
            steps += 1;
        }
        trace!(steps, "deferred queue idle");
        steps
    }
}
