// ABOUTME: Per-view overlay renderer for relative line numbers
// ABOUTME: Recomputes and replaces the whole phantom set on every trigger

use std::time::Duration;

use relnum_logging::{PerfTimer, debug, trace};
use relnum_types::{
    Color, DEFAULT_COLOR, DEFAULT_ENABLED, DEFAULT_ZERO_COLOR, OPT_COLOR, OPT_ENABLED,
    OPT_ZERO_COLOR, PHANTOM_KEY, Region, ViewId,
};

use crate::capabilities::{HostError, Settings, View};
use crate::line_numbers::compute_line_numbers;
use crate::phantom::{Phantom, PhantomLayout, PhantomSet};
use crate::template;

/// Render passes slower than this are logged as warnings
const SLOW_RENDER: Duration = Duration::from_millis(16);

/// Lifecycle hooks fired by the host for a single view
pub trait ViewObserver {
    fn on_modified(&mut self, view: &mut dyn View) -> Result<(), RenderError>;

    fn on_activated(&mut self, view: &mut dyn View) -> Result<(), RenderError>;

    fn on_selection_modified(&mut self, view: &mut dyn View) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{0} has no selection to anchor relative line numbers")]
    NoSelection(ViewId),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// What a render pass did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Phantoms were computed; `changed` is false when they matched the
    /// previous pass and the host was not touched
    Rendered { overlays: usize, changed: bool },
    /// Disabled with phantoms still showing; they were erased
    Cleared,
    /// Disabled and nothing showing
    Skipped,
}

/// Settings snapshot for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    pub enabled: bool,
    pub color: Color,
    pub zero_color: Color,
}

impl OverlayOptions {
    pub fn from_settings(settings: &dyn Settings) -> Self {
        Self {
            enabled: settings.get_bool_or(OPT_ENABLED, DEFAULT_ENABLED),
            color: Color::new(settings.get_string_or(OPT_COLOR, DEFAULT_COLOR)),
            zero_color: Color::new(settings.get_string_or(OPT_ZERO_COLOR, DEFAULT_ZERO_COLOR)),
        }
    }
}

/// Relative line numbers for one view.
///
/// Holds nothing between passes except the phantom set it owns; every
/// pass reads the view and settings afresh.
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    view_id: ViewId,
    phantoms: PhantomSet,
}

impl OverlayRenderer {
    pub fn new(view_id: ViewId) -> Self {
        Self {
            view_id,
            phantoms: PhantomSet::new(PHANTOM_KEY),
        }
    }

    /// Create the renderer for `view` and draw it once
    pub fn attach<V: View + ?Sized>(view: &mut V) -> Result<Self, RenderError> {
        let mut renderer = Self::new(view.id());
        renderer.render(view)?;
        Ok(renderer)
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn phantoms(&self) -> &PhantomSet {
        &self.phantoms
    }

    pub fn render<V: View + ?Sized>(&mut self, view: &mut V) -> Result<RenderOutcome, RenderError> {
        let _span = tracing::debug_span!("render_relative_line_numbers", view = %self.view_id)
            .entered();
        let _timer =
            PerfTimer::new("render_relative_line_numbers").with_warn_threshold(SLOW_RENDER);

        let options = OverlayOptions::from_settings(view.settings());

        if !options.enabled {
            if self.phantoms.is_empty() {
                trace!("Relative line numbers disabled");
                return Ok(RenderOutcome::Skipped);
            }
            self.phantoms.clear(view)?;
            debug!("Relative line numbers disabled, cleared stale overlays");
            return Ok(RenderOutcome::Cleared);
        }

        let primary = view
            .selection()
            .first()
            .copied()
            .ok_or(RenderError::NoSelection(self.view_id))?;

        let current_line = view.rowcol(primary.begin()).row;
        let last_line = view.rowcol(view.size()).row;
        let visible_line_count = view.lines(view.visible_region()).len();

        let current = current_line as i64;
        let margin = visible_line_count as i64;
        let candidates = Region::new(
            view.text_point(current - margin, 0),
            view.text_point(current + margin, 0),
        );

        let lines = view.lines(candidates);
        let rows: Vec<usize> = lines.iter().map(|line| view.rowcol(line.a).row).collect();
        let numbers = compute_line_numbers(rows, current_line, last_line);

        let phantoms: Vec<Phantom> = lines
            .iter()
            .zip(&numbers)
            .map(|(line, number)| {
                let color = if number.is_current {
                    &options.zero_color
                } else {
                    &options.color
                };
                Phantom::new(*line, template::render(color, number), PhantomLayout::Inline)
            })
            .collect();

        let overlays = phantoms.len();
        let changed = self.phantoms.update(view, phantoms)?;

        debug!(
            current_line,
            last_line,
            visible_line_count,
            overlays,
            changed,
            "Rendered relative line numbers"
        );

        Ok(RenderOutcome::Rendered { overlays, changed })
    }
}

impl ViewObserver for OverlayRenderer {
    fn on_modified(&mut self, view: &mut dyn View) -> Result<(), RenderError> {
        self.render(view).map(|_| ())
    }

    fn on_activated(&mut self, view: &mut dyn View) -> Result<(), RenderError> {
        self.render(view).map(|_| ())
    }

    fn on_selection_modified(&mut self, view: &mut dyn View) -> Result<(), RenderError> {
        self.render(view).map(|_| ())
    }
}
