mod coalescer;

pub use coalescer::{CoalescerConfig, DrainTicket, PointerCoalescer, PointerSample};

use serde::{Deserialize, Serialize};

/// Hover session state of one chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

/// Pointer input as delivered by the host adapter.
///
/// Coordinates are container-relative pixels; `time_ms` is the host's event
/// timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    #[serde(rename_all = "camelCase")]
    Enter { x: f64, y: f64, time_ms: f64 },
    #[serde(rename_all = "camelCase")]
    Move { x: f64, y: f64, time_ms: f64 },
    Leave,
}

impl PointerEvent {
    #[must_use]
    pub fn position(self) -> Option<(f64, f64)> {
        match self {
            Self::Enter { x, y, .. } | Self::Move { x, y, .. } => Some((x, y)),
            Self::Leave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_events_parse_from_host_json() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"type": "move", "x": 12.5, "y": 40, "timeMs": 1000}"#)
                .expect("move event");
        assert_eq!(event.position(), Some((12.5, 40.0)));

        let leave: PointerEvent = serde_json::from_str(r#"{"type": "leave"}"#).expect("leave");
        assert_eq!(leave.position(), None);
    }
}
