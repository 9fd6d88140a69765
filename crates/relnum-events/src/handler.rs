// ABOUTME: Event handler trait and error type for the view event system
// ABOUTME: Handlers run synchronously on the host's dispatch thread

use relnum_types::ViewId;
use std::fmt::Debug;

/// Generic event handler trait for domain events.
///
/// `Context` is whatever the handler needs from the host while handling,
/// typically access to the view the event refers to.
pub trait EventHandler<E: Debug> {
    type Context: ?Sized;
    type Error: Debug;

    /// Handle a single domain event
    fn handle(&mut self, event: &E, cx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Handle multiple events in order, stopping at the first failure
    fn handle_batch(&mut self, events: &[E], cx: &mut Self::Context) -> Result<(), Self::Error> {
        for event in events {
            self.handle(event, cx)?;
        }
        Ok(())
    }
}

/// Event handler error types
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("No view registered for {0}")]
    ViewNotFound(ViewId),

    #[error("Handler internal error: {source}")]
    Internal {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl HandlerError {
    pub fn internal(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal {
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestEvent(String);

    struct TestHandler {
        handled_events: Vec<String>,
    }

    impl EventHandler<TestEvent> for TestHandler {
        type Context = Vec<String>;
        type Error = HandlerError;

        fn handle(&mut self, event: &TestEvent, cx: &mut Self::Context) -> Result<(), Self::Error> {
            if event.0 == "bad" {
                return Err(HandlerError::internal(std::io::Error::other("bad event")));
            }
            self.handled_events.push(event.0.clone());
            cx.push(format!("saw {}", event.0));
            Ok(())
        }
    }

    #[test]
    fn test_event_handler() {
        let mut handler = TestHandler {
            handled_events: Vec::new(),
        };
        let mut cx = Vec::new();

        handler
            .handle(&TestEvent("test".to_string()), &mut cx)
            .unwrap();

        assert_eq!(handler.handled_events, vec!["test".to_string()]);
        assert_eq!(cx, vec!["saw test".to_string()]);
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let mut handler = TestHandler {
            handled_events: Vec::new(),
        };
        let mut cx = Vec::new();

        let events = vec![
            TestEvent("event1".to_string()),
            TestEvent("bad".to_string()),
            TestEvent("event2".to_string()),
        ];

        let result = handler.handle_batch(&events, &mut cx);

        assert!(matches!(result, Err(HandlerError::Internal { .. })));
        assert_eq!(handler.handled_events, vec!["event1".to_string()]);
    }

    #[test]
    fn test_internal_error_keeps_source() {
        let io = std::io::Error::other("disk gone");
        let err = HandlerError::internal(io);
        assert_eq!(err.to_string(), "Handler internal error: disk gone");
        assert!(std::error::Error::source(&err).is_some());
    }
}
