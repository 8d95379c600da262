//! Tab-stop indentation for single lines and selections.
//!
//! # Responsibility
//! - Snap a line's leading spaces to the next/previous tab stop.
//! - Apply the same rule to every line a selection touches.
//!
//! # Invariants
//! - Increase always adds `1..=tab_width` spaces, even on an aligned line.
//! - Decrease on a zero-width indent is a no-op, never an error.
//! - Spaces are only ever added or removed right at a line's begin offset.

use crate::config::{EditorConfig, DEFAULT_TAB_WIDTH, MAX_TAB_WIDTH};
use crate::editor::locate::locate_line;
use crate::editor::{insert_at, remove_range, EditError, EditResult};
use crate::model::edit::{shift_offset, IndentEdit, RangeIndentEdit};
use crate::model::line::indent_width_of;
use crate::model::selection::Selection;

/// Indent/outdent calculator for a fixed tab-stop width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentEngine {
    tab_width: usize,
}

impl Default for IndentEngine {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl IndentEngine {
    /// Creates an engine with the given tab stop width.
    ///
    /// # Errors
    /// - `EditError::InvalidTabWidth` when `tab_width` is zero or above
    ///   `MAX_TAB_WIDTH`.
    pub fn new(tab_width: usize) -> EditResult<Self> {
        if tab_width == 0 || tab_width > MAX_TAB_WIDTH {
            return Err(EditError::InvalidTabWidth(tab_width));
        }
        Ok(Self { tab_width })
    }

    pub fn from_config(config: &EditorConfig) -> EditResult<Self> {
        Self::new(config.tab_width)
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Spaces needed to reach the next stop; never zero.
    pub fn spaces_to_add(&self, indent_width: usize) -> usize {
        self.tab_width - (indent_width % self.tab_width)
    }

    /// Spaces to drop to reach the previous stop; zero only for no indent.
    pub fn spaces_to_remove(&self, indent_width: usize) -> usize {
        if indent_width == 0 {
            return 0;
        }
        match indent_width % self.tab_width {
            0 => self.tab_width,
            partial => partial,
        }
    }

    /// Inserts spaces at `line_begin_offset` to reach the next tab stop.
    ///
    /// # Errors
    /// - `EditError::OutOfRange` when `line_begin_offset` is past the end.
    /// - `EditError::NotLineStart` when `line_begin_offset` is mid-line.
    /// - `EditError::IndentMismatch` when `current_indent_width` is not the
    ///   line's leading space count.
    pub fn increase_indent_at_line(
        &self,
        buffer: &str,
        line_begin_offset: usize,
        current_indent_width: usize,
    ) -> EditResult<IndentEdit> {
        check_line_head(buffer, line_begin_offset, current_indent_width)?;
        let num_added = self.spaces_to_add(current_indent_width);
        Ok(IndentEdit {
            updated_buffer: insert_at(buffer, line_begin_offset, &" ".repeat(num_added)),
            anchor: line_begin_offset,
            delta: num_added as isize,
        })
    }

    /// Removes leading spaces at `line_begin_offset` down to the previous stop.
    ///
    /// # Errors
    /// - Same as [`IndentEngine::increase_indent_at_line`]. Only spaces are
    ///   ever removed.
    pub fn decrease_indent_at_line(
        &self,
        buffer: &str,
        line_begin_offset: usize,
        current_indent_width: usize,
    ) -> EditResult<IndentEdit> {
        check_line_head(buffer, line_begin_offset, current_indent_width)?;
        let num_removed = self.spaces_to_remove(current_indent_width);
        let updated_buffer = if num_removed == 0 {
            buffer.to_string()
        } else {
            remove_range(buffer, line_begin_offset, line_begin_offset + num_removed)
        };
        Ok(IndentEdit {
            updated_buffer,
            anchor: line_begin_offset,
            delta: -(num_removed as isize),
        })
    }

    /// Indents the line enclosing `offset`.
    pub fn increase_indent(&self, buffer: &str, offset: usize) -> EditResult<IndentEdit> {
        let line = locate_line(buffer, offset)?;
        self.increase_indent_at_line(buffer, line.begin_offset, line.indent_width)
    }

    /// Outdents the line enclosing `offset`.
    pub fn decrease_indent(&self, buffer: &str, offset: usize) -> EditResult<IndentEdit> {
        let line = locate_line(buffer, offset)?;
        self.decrease_indent_at_line(buffer, line.begin_offset, line.indent_width)
    }

    /// Indents every line from the one holding `start` to the one holding `end`.
    ///
    /// # Errors
    /// - `EditError::InvalidRange` when `start > end`.
    /// - `EditError::OutOfRange` when `end` is past the buffer end.
    pub fn increase_indent_range(
        &self,
        buffer: &str,
        start: usize,
        end: usize,
    ) -> EditResult<RangeIndentEdit> {
        self.reindent_range(buffer, start, end, |width| {
            self.spaces_to_add(width) as isize
        })
    }

    /// Outdents every line from the one holding `start` to the one holding `end`.
    ///
    /// # Errors
    /// - `EditError::InvalidRange` when `start > end`.
    /// - `EditError::OutOfRange` when `end` is past the buffer end.
    pub fn decrease_indent_range(
        &self,
        buffer: &str,
        start: usize,
        end: usize,
    ) -> EditResult<RangeIndentEdit> {
        self.reindent_range(buffer, start, end, |width| {
            -(self.spaces_to_remove(width) as isize)
        })
    }

    fn reindent_range(
        &self,
        buffer: &str,
        start: usize,
        end: usize,
        delta_for_width: impl Fn(usize) -> isize,
    ) -> EditResult<RangeIndentEdit> {
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }
        let first = locate_line(buffer, start)?;
        let last = locate_line(buffer, end)?;

        let mut updated_buffer = String::with_capacity(buffer.len() + self.tab_width * 4);
        // Net delta of every edited line above the current one.
        let mut shift: isize = 0;
        let mut delta_at_start = 0;
        let mut delta_at_end = 0;
        let mut selection = Selection::new(start, end);

        for (idx, text) in buffer.split('\n').enumerate() {
            let line_number = idx + 1;
            if idx > 0 {
                updated_buffer.push('\n');
            }
            if line_number < first.line_number || line_number > last.line_number {
                updated_buffer.push_str(text);
                continue;
            }

            let delta = delta_for_width(indent_width_of(text));
            if delta >= 0 {
                updated_buffer.push_str(&" ".repeat(delta.unsigned_abs()));
                updated_buffer.push_str(text);
            } else {
                // Only leading ASCII spaces are removed, so byte slicing is safe.
                updated_buffer.push_str(&text[delta.unsigned_abs()..]);
            }

            if line_number == first.line_number {
                delta_at_start = delta;
                selection.start =
                    shift_offset(start, first.begin_offset, delta).saturating_add_signed(shift);
            }
            if line_number == last.line_number {
                delta_at_end = delta;
                selection.end =
                    shift_offset(end, last.begin_offset, delta).saturating_add_signed(shift);
            }
            shift += delta;
        }

        Ok(RangeIndentEdit {
            updated_buffer,
            delta_at_start,
            delta_at_end,
            selection,
        })
    }
}

/// Rejects offsets that are not a line begin and widths that are not the
/// line's real indentation.
fn check_line_head(
    buffer: &str,
    line_begin_offset: usize,
    current_indent_width: usize,
) -> EditResult<()> {
    let line = locate_line(buffer, line_begin_offset)?;
    if line.column != 0 {
        return Err(EditError::NotLineStart {
            offset: line_begin_offset,
            column: line.column,
        });
    }
    if line.indent_width != current_indent_width {
        return Err(EditError::IndentMismatch {
            line_begin_offset,
            given: current_indent_width,
            actual: line.indent_width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::IndentEngine;
    use crate::editor::EditError;

    #[test]
    fn zero_tab_width_is_rejected() {
        assert_eq!(IndentEngine::new(0), Err(EditError::InvalidTabWidth(0)));
    }

    #[test]
    fn spaces_to_add_snaps_to_next_stop() {
        let engine = IndentEngine::new(4).expect("valid width");
        assert_eq!(engine.spaces_to_add(0), 4);
        assert_eq!(engine.spaces_to_add(3), 1);
        assert_eq!(engine.spaces_to_add(4), 4);
    }

    #[test]
    fn spaces_to_remove_snaps_to_previous_stop() {
        let engine = IndentEngine::new(4).expect("valid width");
        assert_eq!(engine.spaces_to_remove(0), 0);
        assert_eq!(engine.spaces_to_remove(5), 1);
        assert_eq!(engine.spaces_to_remove(8), 4);
    }

    #[test]
    fn increase_at_line_inserts_at_line_begin() {
        let engine = IndentEngine::default();
        let edit = engine
            .increase_indent_at_line("a\n b", 2, 1)
            .expect("line begin is valid");
        assert_eq!(edit.updated_buffer, "a\n  b");
        assert_eq!(edit.delta, 1);
        assert_eq!(edit.anchor, 2);
    }

    #[test]
    fn decrease_at_line_with_no_indent_is_noop() {
        let engine = IndentEngine::default();
        let edit = engine
            .decrease_indent_at_line("abc", 0, 0)
            .expect("zero indent is valid");
        assert_eq!(edit.updated_buffer, "abc");
        assert_eq!(edit.num_removed(), 0);
    }

    #[test]
    fn oversized_tab_width_is_rejected() {
        assert_eq!(IndentEngine::new(17), Err(EditError::InvalidTabWidth(17)));
        assert!(IndentEngine::new(16).is_ok());
    }

    #[test]
    fn decrease_at_line_never_removes_line_text() {
        let engine = IndentEngine::default();
        let err = engine.decrease_indent_at_line("ab\ncd", 0, 2).unwrap_err();
        assert_eq!(
            err,
            EditError::IndentMismatch {
                line_begin_offset: 0,
                given: 2,
                actual: 0,
            }
        );
    }

    #[test]
    fn at_line_edits_require_a_line_begin() {
        let engine = IndentEngine::default();
        let err = engine.increase_indent_at_line("ab\ncd", 1, 0).unwrap_err();
        assert_eq!(err, EditError::NotLineStart { offset: 1, column: 1 });
        let err = engine.decrease_indent_at_line("  ab", 1, 1).unwrap_err();
        assert_eq!(err, EditError::NotLineStart { offset: 1, column: 1 });
    }

    #[test]
    fn at_line_edits_reject_offsets_past_end() {
        let engine = IndentEngine::default();
        let err = engine.increase_indent_at_line("ab", 3, 0).unwrap_err();
        assert_eq!(err, EditError::OutOfRange { offset: 3, len: 2 });
    }

    #[test]
    fn reversed_range_is_rejected() {
        let engine = IndentEngine::default();
        let err = engine.increase_indent_range("abc", 2, 1).unwrap_err();
        assert_eq!(err, EditError::InvalidRange { start: 2, end: 1 });
    }
}
