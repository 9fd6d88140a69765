// ABOUTME: Cross-crate event definitions for decoupled communication
// ABOUTME: View lifecycle events plus the bus and handler traits that carry them

pub mod event_bus;
pub mod handler;
pub mod view;

pub use event_bus::EventBus;
pub use handler::{EventHandler, HandlerError};
pub use view::{Event as ViewEvent, EventKind as ViewEventKind};
