//! Key dispatch onto the editing engine.
//!
//! # Responsibility
//! - Map Enter/Tab/Shift+Tab/Backspace to engine edits for the current
//!   caret or selection.
//! - Return `None` for keys the widget should handle natively.

use crate::editor::continuation::on_line_break;
use crate::editor::indent::IndentEngine;
use crate::editor::locate::locate_line;
use crate::editor::{EditError, EditResult};
use crate::model::edit::IndentEdit;
use crate::model::selection::Selection;

/// Keys the engine may take over from the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Tab,
    ShiftTab,
    Backspace,
}

impl EditorKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Tab => "tab",
            Self::ShiftTab => "shift_tab",
            Self::Backspace => "backspace",
        }
    }
}

/// Buffer and selection to push back into the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEdit {
    pub updated_buffer: String,
    pub selection: Selection,
}

/// Resolves `key` against `buffer` and `selection`.
///
/// Returns `Ok(None)` when the key is left to the widget's default action.
///
/// # Errors
/// - `EditError::InvalidRange` when `selection.start > selection.end`.
/// - `EditError::OutOfRange` when the selection is past the buffer end.
pub fn handle_key(
    engine: &IndentEngine,
    buffer: &str,
    selection: Selection,
    key: EditorKey,
) -> EditResult<Option<KeyEdit>> {
    if selection.start > selection.end {
        return Err(EditError::InvalidRange {
            start: selection.start,
            end: selection.end,
        });
    }

    if !selection.is_caret() {
        let edit = match key {
            EditorKey::Tab => engine.increase_indent_range(buffer, selection.start, selection.end)?,
            EditorKey::ShiftTab => {
                engine.decrease_indent_range(buffer, selection.start, selection.end)?
            }
            EditorKey::Enter | EditorKey::Backspace => return Ok(None),
        };
        return Ok(Some(KeyEdit {
            updated_buffer: edit.updated_buffer,
            selection: edit.selection,
        }));
    }

    let cursor = selection.start;
    match key {
        EditorKey::Enter => {
            let edit = on_line_break(engine, buffer, cursor)?;
            Ok(Some(KeyEdit {
                updated_buffer: edit.updated_buffer,
                selection: Selection::caret(edit.cursor),
            }))
        }
        EditorKey::Tab => Ok(Some(caret_edit(
            engine.increase_indent(buffer, cursor)?,
            cursor,
        ))),
        EditorKey::ShiftTab => Ok(Some(caret_edit(
            engine.decrease_indent(buffer, cursor)?,
            cursor,
        ))),
        EditorKey::Backspace => {
            let line = locate_line(buffer, cursor)?;
            if line.indent_width == 0 || line.column == 0 || line.column > line.indent_width {
                return Ok(None);
            }
            let edit =
                engine.decrease_indent_at_line(buffer, line.begin_offset, line.indent_width)?;
            Ok(Some(caret_edit(edit, cursor)))
        }
    }
}

fn caret_edit(edit: IndentEdit, cursor: usize) -> KeyEdit {
    let new_cursor = edit.translate(cursor);
    KeyEdit {
        updated_buffer: edit.updated_buffer,
        selection: Selection::caret(new_cursor),
    }
}
