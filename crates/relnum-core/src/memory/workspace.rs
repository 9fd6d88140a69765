use std::collections::HashMap;

use relnum_events::{EventBus, EventHandler, HandlerError, ViewEvent};
use relnum_logging::{debug, info};
use relnum_types::{RowCol, ViewId};

use crate::capabilities::{View, ViewHost, ViewQuery};
use crate::memory::settings::{MemorySettings, SharedSettings};
use crate::memory::view::MemoryView;
use crate::registry::RendererRegistry;

/// Open views keyed by id
#[derive(Debug, Default)]
pub struct MemoryViews(HashMap<ViewId, MemoryView>);

impl MemoryViews {
    pub fn insert(&mut self, view: MemoryView) {
        self.0.insert(view.id(), view);
    }

    pub fn remove(&mut self, id: ViewId) -> Option<MemoryView> {
        self.0.remove(&id)
    }

    pub fn get(&self, id: ViewId) -> Option<&MemoryView> {
        self.0.get(&id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut MemoryView> {
        self.0.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ViewHost for MemoryViews {
    fn view_mut(&mut self, id: ViewId) -> Option<&mut dyn View> {
        self.0.get_mut(&id).map(|view| view as &mut dyn View)
    }
}

/// A host editor in miniature.
///
/// Every mutation fires the matching view event through the renderer
/// registry, the way a real editor calls plugin hooks.
#[derive(Debug)]
pub struct MemoryWorkspace {
    views: MemoryViews,
    registry: RendererRegistry,
    global: SharedSettings,
    next_id: u64,
}

impl MemoryWorkspace {
    pub fn new(global: MemorySettings) -> Self {
        Self {
            views: MemoryViews::default(),
            registry: RendererRegistry::new(),
            global: global.into_shared(),
            next_id: 1,
        }
    }

    /// Settings every view inherits unless it overrides them
    pub fn global_settings(&self) -> &SharedSettings {
        &self.global
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn view(&self, id: ViewId) -> Option<&MemoryView> {
        self.views.get(id)
    }

    /// Direct access that fires no events
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut MemoryView> {
        self.views.get_mut(id)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Open a view on `text` and fire `Created`
    pub fn open(&mut self, text: &str) -> Result<ViewId, HandlerError> {
        let id = ViewId(self.next_id);
        self.next_id += 1;

        let settings = MemorySettings::new().with_parent(self.global.clone());
        self.views
            .insert(MemoryView::new(id, text).with_settings(settings));
        info!(view = %id, lines = text.lines().count(), "Opened view");

        self.dispatch_view(ViewEvent::Created { view_id: id })?;
        Ok(id)
    }

    /// Fire `Closed` and drop the view
    pub fn close(&mut self, id: ViewId) -> Result<(), HandlerError> {
        if self.views.get(id).is_none() {
            return Err(HandlerError::ViewNotFound(id));
        }

        self.dispatch_view(ViewEvent::Closed { view_id: id })?;
        self.views.remove(id);
        info!(view = %id, "Closed view");
        Ok(())
    }

    /// Insert text and fire `Modified`
    pub fn insert(&mut self, id: ViewId, offset: usize, text: &str) -> Result<(), HandlerError> {
        self.views
            .get_mut(id)
            .ok_or(HandlerError::ViewNotFound(id))?
            .insert(offset, text);
        self.dispatch_view(ViewEvent::Modified { view_id: id })
    }

    /// Move the caret and fire `SelectionModified`
    pub fn set_cursor(&mut self, id: ViewId, position: RowCol) -> Result<(), HandlerError> {
        self.views
            .get_mut(id)
            .ok_or(HandlerError::ViewNotFound(id))?
            .set_cursor(position);
        self.dispatch_view(ViewEvent::SelectionModified { view_id: id })
    }

    /// Scroll the viewport; hosts fire no event for this
    pub fn scroll(&mut self, id: ViewId, top: usize, height: usize) -> Result<(), HandlerError> {
        self.views
            .get_mut(id)
            .ok_or(HandlerError::ViewNotFound(id))?
            .set_viewport(top, height);
        Ok(())
    }

    /// Focus a view and fire `Activated`
    pub fn activate(&mut self, id: ViewId) -> Result<(), HandlerError> {
        self.dispatch_view(ViewEvent::Activated { view_id: id })
    }
}

impl EventBus for MemoryWorkspace {
    fn dispatch_view(&mut self, event: ViewEvent) -> Result<(), HandlerError> {
        debug!(view = %event.view_id(), event = %event.kind(), "Dispatching view event");
        self.registry.handle(&event, &mut self.views)
    }
}
