// ABOUTME: View domain events for lifecycle, content, activation, and selection changes
// ABOUTME: Immutable fact-based events fired by the host editor

use relnum_types::ViewId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// View domain events - everything the overlay needs to react to.
/// All events are immutable facts about what has happened in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// View was opened
    Created { view_id: ViewId },

    /// Document content shown in the view was modified
    Modified { view_id: ViewId },

    /// View gained focus
    Activated { view_id: ViewId },

    /// Selection or cursor moved
    SelectionModified { view_id: ViewId },

    /// View closed
    Closed { view_id: ViewId },
}

/// Discriminant of [`Event`], used for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Created,
    Modified,
    Activated,
    SelectionModified,
    Closed,
}

impl Event {
    pub fn view_id(&self) -> ViewId {
        match *self {
            Event::Created { view_id }
            | Event::Modified { view_id }
            | Event::Activated { view_id }
            | Event::SelectionModified { view_id }
            | Event::Closed { view_id } => view_id,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Created { .. } => EventKind::Created,
            Event::Modified { .. } => EventKind::Modified,
            Event::Activated { .. } => EventKind::Activated,
            Event::SelectionModified { .. } => EventKind::SelectionModified,
            Event::Closed { .. } => EventKind::Closed,
        }
    }
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::Modified => "modified",
            EventKind::Activated => "activated",
            EventKind::SelectionModified => "selection_modified",
            EventKind::Closed => "closed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id_accessor() {
        let view_id = ViewId(3);
        let events = [
            Event::Created { view_id },
            Event::Modified { view_id },
            Event::Activated { view_id },
            Event::SelectionModified { view_id },
            Event::Closed { view_id },
        ];

        for event in events {
            assert_eq!(event.view_id(), view_id);
        }
    }

    #[test]
    fn test_event_kind() {
        let event = Event::SelectionModified { view_id: ViewId(1) };
        assert_eq!(event.kind(), EventKind::SelectionModified);
        assert_eq!(event.kind().to_string(), "selection_modified");
    }
}
