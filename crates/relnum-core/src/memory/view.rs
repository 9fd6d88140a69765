use ropey::Rope;
use std::collections::HashMap;

use relnum_types::{Region, RowCol, ViewId};

use crate::capabilities::{HostError, PhantomHost, Settings, View, ViewQuery};
use crate::memory::settings::MemorySettings;
use crate::phantom::Phantom;

const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// A rope-backed view with a cursor, a viewport, and phantom storage
#[derive(Debug, Clone)]
pub struct MemoryView {
    id: ViewId,
    text: Rope,
    selection: Vec<Region>,
    scroll_top: usize,
    viewport_height: usize,
    settings: MemorySettings,
    phantoms: HashMap<String, Vec<Phantom>>,
    phantom_updates: usize,
    closed: bool,
}

impl MemoryView {
    pub fn new(id: ViewId, text: &str) -> Self {
        Self {
            id,
            text: Rope::from_str(text),
            selection: vec![Region::point(0)],
            scroll_top: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            settings: MemorySettings::new(),
            phantoms: HashMap::new(),
            phantom_updates: 0,
            closed: false,
        }
    }

    pub fn with_settings(mut self, settings: MemorySettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings_mut(&mut self) -> &mut MemorySettings {
        &mut self.settings
    }

    /// Index of the last row, which may be an empty row after a final newline
    pub fn last_row(&self) -> usize {
        self.text.len_lines().saturating_sub(1)
    }

    /// Text of `row` without its line terminator
    pub fn line_text(&self, row: usize) -> String {
        let region = self.line_region(row.min(self.last_row()));
        self.text.slice(region.begin()..region.end()).to_string()
    }

    /// Show `height` rows starting at `top`
    pub fn set_viewport(&mut self, top: usize, height: usize) {
        self.scroll_top = top;
        self.viewport_height = height.max(1);
    }

    pub fn set_selection(&mut self, selection: Vec<Region>) {
        let size = self.size();
        self.selection = selection
            .into_iter()
            .map(|r| Region::new(r.a.min(size), r.b.min(size)))
            .collect();
    }

    /// Collapse the selection to a single caret
    pub fn set_cursor(&mut self, position: RowCol) {
        let offset = self.text_point(position.row as i64, position.col);
        self.selection = vec![Region::point(offset)];
    }

    /// Insert `text` at `offset`, shifting selections at or after it
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.size());
        let inserted = text.chars().count();
        self.text.insert(offset, text);

        let shift = |pos: usize| if pos >= offset { pos + inserted } else { pos };
        for region in &mut self.selection {
            *region = Region::new(shift(region.a), shift(region.b));
        }
    }

    /// Remove the characters in `region`, pulling selections back
    pub fn remove(&mut self, region: Region) {
        let start = region.begin().min(self.size());
        let end = region.end().min(self.size());
        self.text.remove(start..end);

        let removed = end - start;
        let shift = |pos: usize| {
            if pos >= end {
                pos - removed
            } else {
                pos.min(start)
            }
        };
        for region in &mut self.selection {
            *region = Region::new(shift(region.a), shift(region.b));
        }
    }

    /// Phantoms currently shown under `key`
    pub fn phantoms(&self, key: &str) -> &[Phantom] {
        self.phantoms.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of successful phantom updates sent by plugins
    pub fn phantom_updates(&self) -> usize {
        self.phantom_updates
    }

    /// Mark the view closed; later phantom updates fail
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn line_region(&self, row: usize) -> Region {
        let start = self.text.line_to_char(row);
        let line = self.text.line(row);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        Region::new(start, start + len)
    }
}

impl ViewQuery for MemoryView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn size(&self) -> usize {
        self.text.len_chars()
    }

    fn rowcol(&self, offset: usize) -> RowCol {
        let offset = offset.min(self.size());
        let row = self.text.char_to_line(offset);
        RowCol::new(row, offset - self.text.line_to_char(row))
    }

    fn text_point(&self, row: i64, col: usize) -> usize {
        let row = row.clamp(0, self.last_row() as i64) as usize;
        let line = self.line_region(row);
        line.begin() + col.min(line.len())
    }

    fn lines(&self, region: Region) -> Vec<Region> {
        let first = self.rowcol(region.begin()).row;
        let last = self.rowcol(region.end()).row;
        (first..=last).map(|row| self.line_region(row)).collect()
    }

    fn visible_region(&self) -> Region {
        let top = self.scroll_top.min(self.last_row());
        let bottom = top
            .saturating_add(self.viewport_height - 1)
            .min(self.last_row());
        Region::new(self.line_region(top).begin(), self.line_region(bottom).end())
    }

    fn selection(&self) -> Vec<Region> {
        self.selection.clone()
    }
}

impl PhantomHost for MemoryView {
    fn update_phantoms(&mut self, key: &str, phantoms: &[Phantom]) -> Result<(), HostError> {
        if self.closed {
            return Err(HostError::ViewClosed(self.id));
        }

        let size = self.size();
        if let Some(bad) = phantoms.iter().find(|p| p.region.end() > size) {
            return Err(HostError::InvalidRegion {
                region: bad.region,
                size,
            });
        }

        self.phantoms.insert(key.to_string(), phantoms.to_vec());
        self.phantom_updates += 1;
        Ok(())
    }

    fn erase_phantoms(&mut self, key: &str) -> Result<(), HostError> {
        if self.closed {
            return Err(HostError::ViewClosed(self.id));
        }

        self.phantoms.remove(key);
        Ok(())
    }
}

impl View for MemoryView {
    fn settings(&self) -> &dyn Settings {
        &self.settings
    }
}
