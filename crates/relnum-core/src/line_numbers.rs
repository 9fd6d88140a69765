// ABOUTME: Relative line number arithmetic and padding
// ABOUTME: Pure functions, no host access

use std::ops::RangeInclusive;

/// Markup entity used to left-pad numbers
pub const NBSP: &str = "&nbsp;";

/// The number a row shows: its distance from the current row, or the
/// current row's own 1-based number.
pub fn display_value(row: usize, current_line: usize) -> usize {
    if row == current_line {
        current_line + 1
    } else {
        row.abs_diff(current_line)
    }
}

/// Count of decimal digits in `n`
pub fn decimal_width(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

/// Padding needed to align `value` to the width of `last_line`
pub fn padding_width(value: usize, last_line: usize) -> usize {
    decimal_width(last_line).saturating_sub(decimal_width(value))
}

/// `value` left-padded with [`NBSP`] to the width of `last_line`
pub fn pad_value(value: usize, last_line: usize) -> String {
    let mut text = NBSP.repeat(padding_width(value, last_line));
    text.push_str(&value.to_string());
    text
}

/// Rows that get an overlay: one viewport of margin either side of the
/// current row, clipped to the document.
pub fn candidate_rows(
    current_line: usize,
    visible_line_count: usize,
    last_line: usize,
) -> RangeInclusive<usize> {
    let first = current_line.saturating_sub(visible_line_count);
    let last = current_line.saturating_add(visible_line_count).min(last_line);
    first.min(last)..=last
}

/// One computed gutter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNumber {
    pub row: usize,
    pub value: usize,
    /// Padded markup text
    pub text: String,
    pub is_current: bool,
}

impl LineNumber {
    pub fn new(row: usize, current_line: usize, last_line: usize) -> Self {
        let value = display_value(row, current_line);
        Self {
            row,
            value,
            text: pad_value(value, last_line),
            is_current: row == current_line,
        }
    }
}

pub fn compute_line_numbers<I>(rows: I, current_line: usize, last_line: usize) -> Vec<LineNumber>
where
    I: IntoIterator<Item = usize>,
{
    rows.into_iter()
        .map(|row| LineNumber::new(row, current_line, last_line))
        .collect()
}
