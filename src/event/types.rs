//! Event types
//!
//! Events are tagged variants keyed by a canonical name. Dispatch matches
//! on the name discriminant, so a listener subscribes to `mouse.move`
//! rather than to some particular event instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical event name, the dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventName {
    /// `mouse.move`
    MouseMove,
    /// `mouse.click`
    MouseClick,
    /// `mouse.dblclick`
    MouseDoubleClick,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::MouseMove => "mouse.move",
            EventName::MouseClick => "mouse.click",
            EventName::MouseDoubleClick => "mouse.dblclick",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event payload variants.
///
/// Click and double-click carry no payload: no gesture rule is wired to
/// them yet, they exist as the extension point for click gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Absolute target screen position, strictly inside the screen bounds
    Move { x: i32, y: i32 },
    Click,
    DoubleClick,
}

impl EventKind {
    /// The canonical name this payload dispatches under
    pub fn name(&self) -> EventName {
        match self {
            EventKind::Move { .. } => EventName::MouseMove,
            EventKind::Click => EventName::MouseClick,
            EventKind::DoubleClick => EventName::MouseDoubleClick,
        }
    }
}

/// A dispatched event: payload, wall-clock timestamp, and a propagation
/// flag a handler may set to halt delivery to subsequent listeners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    kind: EventKind,
    /// Time the event was constructed
    pub event_time: DateTime<Utc>,
    #[serde(skip)]
    stopped: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            event_time: Utc::now(),
            stopped: false,
        }
    }

    /// Convenience constructor for a pointer-move event
    pub fn mouse_move(x: i32, y: i32) -> Self {
        Self::new(EventKind::Move { x, y })
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn name(&self) -> EventName {
        self.kind.name()
    }

    /// Halt delivery to listeners that have not yet received this event
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped
    }
}
