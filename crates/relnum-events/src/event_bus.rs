// ABOUTME: Event bus trait for decoupled communication
// ABOUTME: Hosts implement this to feed view events to registered handlers

use crate::handler::HandlerError;
use crate::view::Event as ViewEvent;

/// Event bus trait for dispatching view events
pub trait EventBus {
    /// Dispatch a view event to every interested handler
    fn dispatch_view(&mut self, event: ViewEvent) -> Result<(), HandlerError>;

    /// Dispatch events in order, stopping at the first failure
    fn dispatch_all(&mut self, events: &[ViewEvent]) -> Result<(), HandlerError> {
        for event in events {
            self.dispatch_view(*event)?;
        }
        Ok(())
    }
}
