use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Queue-thinning parameters for rapid pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoalescerConfig {
    /// Queue length above which the backlog is thinned.
    pub threshold: usize,
    /// Evenly spaced older samples kept when thinning, besides the newest.
    pub quantiles: usize,
    /// When a drain step takes the newest sample, drop everything older
    /// instead of painting it afterwards.
    pub drop_stale: bool,
}

impl Default for CoalescerConfig {
    fn default() -> Self {
        Self {
            threshold: 5,
            quantiles: 4,
            drop_stale: true,
        }
    }
}

impl CoalescerConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if self.threshold == 0 {
            return Err(ChartError::InvalidData(
                "coalescer threshold must be > 0".to_owned(),
            ));
        }
        if self.quantiles + 1 > self.threshold {
            return Err(ChartError::InvalidData(format!(
                "coalescer keeps quantiles + 1 = {} samples when thinning, which exceeds threshold {}",
                self.quantiles + 1,
                self.threshold
            )));
        }
        Ok(self)
    }
}

/// One buffered pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pixel_x: f64,
    /// Host event time in milliseconds.
    pub time_ms: f64,
    /// Submission order, unique per coalescer.
    pub seq: u64,
}

/// Permission to run one drain step.
///
/// Tickets are invalidated by [`PointerCoalescer::cancel`]; running a stale
/// ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrainTicket {
    generation: u64,
}

impl DrainTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Bounded, recency-biased pointer queue with a cooperative drain flag.
#[derive(Debug, Clone)]
pub struct PointerCoalescer {
    config: CoalescerConfig,
    queue: VecDeque<PointerSample>,
    draining: bool,
    generation: u64,
    next_seq: u64,
}

impl PointerCoalescer {
    #[must_use]
    pub fn new(config: CoalescerConfig) -> Self {
        Self {
            config,
            queue: VecDeque::with_capacity(config.threshold + 1),
            draining: false,
            generation: 0,
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> CoalescerConfig {
        self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn is_draining(&self) -> bool {
        self.draining
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Buffers a pointer position.
    ///
    /// Returns a ticket when a drain must be scheduled; `None` while a drain
    /// is already pending, in which case the running drain picks it up.
    pub fn submit(&mut self, pixel_x: f64, time_ms: f64) -> Option<DrainTicket> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push_back(PointerSample {
            pixel_x,
            time_ms,
            seq,
        });
        if self.queue.len() > self.config.threshold {
            self.thin();
        }

        if self.draining {
            return None;
        }
        self.draining = true;
        Some(self.ticket())
    }

    /// Pops the newest sample for the drain step holding `ticket`.
    ///
    /// An empty queue ends the drain chain even if `finish_step` is never
    /// called for this ticket.
    pub fn take(&mut self, ticket: DrainTicket) -> Option<PointerSample> {
        if ticket.generation != self.generation {
            trace!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring cancelled drain ticket"
            );
            return None;
        }
        let Some(newest) = self.queue.pop_back() else {
            // Replayed ticket after the backlog ran dry: close the chain so
            // the next submit schedules a fresh drain.
            if self.draining {
                trace!(generation = self.generation, "drain ticket found empty queue");
            }
            self.draining = false;
            return None;
        };
        if self.config.drop_stale && !self.queue.is_empty() {
            trace!(dropped = self.queue.len(), seq = newest.seq, "dropping stale pointer samples");
            self.queue.clear();
        }
        Some(newest)
    }

    /// Ends the drain step holding `ticket`.
    ///
    /// Returns the ticket for the next step when samples remain, otherwise
    /// clears the draining flag.
    pub fn finish_step(&mut self, ticket: DrainTicket) -> Option<DrainTicket> {
        if ticket.generation != self.generation {
            return None;
        }
        if self.queue.is_empty() {
            self.draining = false;
            None
        } else {
            Some(self.ticket())
        }
    }

    /// Drops the backlog and invalidates every outstanding ticket.
    pub fn cancel(&mut self) {
        if !self.queue.is_empty() || self.draining {
            trace!(dropped = self.queue.len(), "cancelling pointer drain");
        }
        self.queue.clear();
        self.draining = false;
        self.generation += 1;
    }

    fn ticket(&self) -> DrainTicket {
        DrainTicket {
            generation: self.generation,
        }
    }

    /// Keeps `quantiles` evenly spaced older samples plus the newest one.
    fn thin(&mut self) {
        let Some(newest) = self.queue.pop_back() else {
            return;
        };
        let older = self.queue.len();
        let quantiles = self.config.quantiles.min(older);
        let mut kept: SmallVec<[PointerSample; 8]> = SmallVec::new();
        for k in 0..quantiles {
            let index = if quantiles == 1 {
                0
            } else {
                ((k * (older - 1)) as f64 / (quantiles - 1) as f64).round() as usize
            };
            let sample = self.queue[index];
            if kept.last().is_none_or(|last: &PointerSample| last.seq != sample.seq) {
                kept.push(sample);
            }
        }
        kept.push(newest);
        trace!(
            before = older + 1,
            after = kept.len(),
            "thinned pointer backlog"
        );
        self.queue.clear();
        self.queue.extend(kept);
    }
}
