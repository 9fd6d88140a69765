// ABOUTME: Routes view lifecycle events to one overlay renderer per view
// ABOUTME: Creates renderers on open, drops them on close, and times every dispatch

use std::collections::HashMap;
use std::time::Instant;

use relnum_events::{EventHandler, HandlerError, ViewEvent};
use relnum_logging::{PerfStats, debug, warn};
use relnum_types::ViewId;

use crate::capabilities::ViewHost;
use crate::renderer::{OverlayRenderer, RenderError, ViewObserver};

/// Owns the renderer of every open view
#[derive(Debug, Default)]
pub struct RendererRegistry {
    renderers: HashMap<ViewId, OverlayRenderer>,
    stats: PerfStats,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn contains(&self, view_id: ViewId) -> bool {
        self.renderers.contains_key(&view_id)
    }

    pub fn renderer(&self, view_id: ViewId) -> Option<&OverlayRenderer> {
        self.renderers.get(&view_id)
    }

    /// Dispatch timings keyed by event kind
    pub fn stats(&self) -> &PerfStats {
        &self.stats
    }

    fn route(
        &mut self,
        event: &ViewEvent,
        host: &mut (dyn ViewHost + 'static),
    ) -> Result<(), HandlerError> {
        let view_id = event.view_id();

        if let ViewEvent::Closed { .. } = event {
            if self.renderers.remove(&view_id).is_some() {
                debug!(view = %view_id, "Detached relative line numbers");
            }
            return Ok(());
        }

        let view = host
            .view_mut(view_id)
            .ok_or(HandlerError::ViewNotFound(view_id))?;

        // Views opened before the registry existed get a renderer on first contact
        let renderer = self.renderers.entry(view_id).or_insert_with(|| {
            debug!(view = %view_id, "Attached relative line numbers");
            OverlayRenderer::new(view_id)
        });

        let result: Result<(), RenderError> = match event {
            ViewEvent::Created { .. } => renderer.render(view).map(|_| ()),
            ViewEvent::Modified { .. } => renderer.on_modified(view),
            ViewEvent::Activated { .. } => renderer.on_activated(view),
            ViewEvent::SelectionModified { .. } => renderer.on_selection_modified(view),
            ViewEvent::Closed { .. } => Ok(()),
        };

        result.map_err(|error| {
            warn!(
                view = %view_id,
                event = %event.kind(),
                %error,
                "Relative line number render failed"
            );
            HandlerError::internal(error)
        })
    }
}

impl EventHandler<ViewEvent> for RendererRegistry {
    type Context = dyn ViewHost;
    type Error = HandlerError;

    fn handle(&mut self, event: &ViewEvent, host: &mut Self::Context) -> Result<(), HandlerError> {
        let started = Instant::now();
        let result = self.route(event, host);
        self.stats
            .record_operation(event.kind().as_str(), started.elapsed());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{Settings, View};
    use crate::memory::{MemoryView, MemoryViews};
    use relnum_types::{OPT_ENABLED, PHANTOM_KEY, RowCol};

    fn host_with(id: u64, text: &str) -> MemoryViews {
        let mut views = MemoryViews::default();
        views.insert(MemoryView::new(ViewId(id), text));
        views
    }

    #[test]
    fn test_created_attaches_and_renders() {
        let mut views = host_with(1, "a\nb\nc");
        let mut registry = RendererRegistry::new();

        registry
            .handle(&ViewEvent::Created { view_id: ViewId(1) }, &mut views)
            .unwrap();

        assert!(registry.contains(ViewId(1)));
        assert_eq!(registry.len(), 1);
        assert_eq!(views.get(ViewId(1)).unwrap().phantoms(PHANTOM_KEY).len(), 3);
        assert_eq!(registry.stats().get("created").unwrap().count, 1);
    }

    #[test]
    fn test_unknown_view_attaches_lazily() {
        let mut views = host_with(2, "a\nb");
        let mut registry = RendererRegistry::new();

        registry
            .handle(&ViewEvent::SelectionModified { view_id: ViewId(2) }, &mut views)
            .unwrap();

        assert!(registry.contains(ViewId(2)));
        assert!(!views.get(ViewId(2)).unwrap().phantoms(PHANTOM_KEY).is_empty());
    }

    #[test]
    fn test_closed_detaches() {
        let mut views = host_with(1, "a");
        let mut registry = RendererRegistry::new();
        registry
            .handle(&ViewEvent::Created { view_id: ViewId(1) }, &mut views)
            .unwrap();

        registry
            .handle(&ViewEvent::Closed { view_id: ViewId(1) }, &mut views)
            .unwrap();
        assert!(registry.is_empty());

        // A second close is harmless
        registry
            .handle(&ViewEvent::Closed { view_id: ViewId(1) }, &mut views)
            .unwrap();
        assert_eq!(registry.stats().get("closed").unwrap().count, 2);
    }

    #[test]
    fn test_missing_view_is_reported() {
        let mut views = MemoryViews::default();
        let mut registry = RendererRegistry::new();

        let err = registry
            .handle(&ViewEvent::Modified { view_id: ViewId(9) }, &mut views)
            .unwrap_err();

        assert!(matches!(err, HandlerError::ViewNotFound(ViewId(9))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_render_failure_is_internal_error() {
        let mut views = host_with(1, "a\nb");
        views.get_mut(ViewId(1)).unwrap().close();
        let mut registry = RendererRegistry::new();

        let err = registry
            .handle(&ViewEvent::Activated { view_id: ViewId(1) }, &mut views)
            .unwrap_err();

        assert!(matches!(err, HandlerError::Internal { .. }));
        assert!(err.to_string().contains("view#1"));
    }

    #[test]
    fn test_batch_follows_events() {
        let mut views = host_with(1, "a\nb\nc\nd");
        let mut registry = RendererRegistry::new();

        views
            .get_mut(ViewId(1))
            .unwrap()
            .set_cursor(RowCol::new(3, 0));
        registry
            .handle_batch(
                &[
                    ViewEvent::Created { view_id: ViewId(1) },
                    ViewEvent::Activated { view_id: ViewId(1) },
                ],
                &mut views,
            )
            .unwrap();

        let view = views.get(ViewId(1)).unwrap();
        assert!(view.phantoms(PHANTOM_KEY)[3].content.contains(">4</div>"));
        assert!(view.phantoms(PHANTOM_KEY)[0].content.contains(">3</div>"));
    }

    #[test]
    fn test_disabled_view_stays_clean() {
        let mut views = host_with(1, "a\nb");
        views
            .get_mut(ViewId(1))
            .unwrap()
            .settings_mut()
            .set(OPT_ENABLED, false);
        let mut registry = RendererRegistry::new();

        registry
            .handle(&ViewEvent::Created { view_id: ViewId(1) }, &mut views)
            .unwrap();

        let view = views.get(ViewId(1)).unwrap();
        assert!(view.phantoms(PHANTOM_KEY).is_empty());
        assert_eq!(view.phantom_updates(), 0);
        assert!(!view.settings().get_bool_or(OPT_ENABLED, true));
    }
}
