// ABOUTME: Drives the in-memory host the way an editor would and prints the result
// ABOUTME: Opens the file, places viewport and cursor, then writes the gutter

use anyhow::{Context, Result};
use std::io::Write;

use relnum_core::line_numbers::decimal_width;
use relnum_core::{MemoryView, MemoryWorkspace, ViewQuery};
use relnum_types::{PHANTOM_KEY, RowCol};

use crate::cli::Cli;
use crate::config::Config;
use crate::gutter::GutterCell;

/// Separator between the gutter and the line text
pub const GUTTER_SEPARATOR: &str = " │ ";

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let mut workspace = MemoryWorkspace::new(config.to_settings()?);
    let id = workspace.open(&text).context("Failed to open view")?;

    let last_row = workspace
        .view(id)
        .map(MemoryView::last_row)
        .context("View vanished after opening")?;
    let cursor_row = cli.cursor_row().min(last_row);
    let top_row = cli.top_row(cursor_row).min(last_row);

    // Scrolling fires nothing; the cursor move that follows re-renders
    workspace.scroll(id, top_row, cli.height())?;
    workspace.set_cursor(id, RowCol::new(cursor_row, 0))?;

    relnum_logging::info!(
        file = %cli.file.display(),
        cursor_row,
        top_row,
        height = cli.height(),
        "Rendered relative line numbers"
    );

    let view = workspace.view(id).context("View vanished after rendering")?;
    if cli.html {
        write_markup(view, out)
    } else {
        write_gutter(view, !cli.no_color, out)
    }
}

/// Every phantom body in document order
fn write_markup(view: &MemoryView, out: &mut impl Write) -> Result<()> {
    for phantom in view.phantoms(PHANTOM_KEY) {
        writeln!(out, "{}", phantom.content.trim())?;
    }
    Ok(())
}

/// The visible rows, each prefixed by its gutter cell
fn write_gutter(view: &MemoryView, ansi: bool, out: &mut impl Write) -> Result<()> {
    let phantoms = view.phantoms(PHANTOM_KEY);
    let width = decimal_width(view.last_row());

    let visible = view.visible_region();
    let first = view.rowcol(visible.begin()).row;
    let last = view.rowcol(visible.end()).row;

    for row in first..=last {
        let cell = phantoms
            .iter()
            .find(|phantom| view.rowcol(phantom.region.begin()).row == row)
            .and_then(|phantom| GutterCell::from_markup(&phantom.content))
            .unwrap_or_else(|| GutterCell::blank(width));

        writeln!(
            out,
            "{}{GUTTER_SEPARATOR}{}",
            cell.paint(ansi),
            view.line_text(row)
        )?;
    }
    Ok(())
}
