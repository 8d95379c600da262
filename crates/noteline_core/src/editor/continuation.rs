//! Bullet-aware line break policy.
//!
//! # Responsibility
//! - Decide what a line break request at a caret should do.
//! - Produce the resulting buffer and collapsed caret.
//!
//! # Invariants
//! - Exactly one `LineBreakAction` is chosen, in priority order:
//!   outdent, strip bullet, continue indent+bullet, continue indent only.
//! - The new caret is the anchor plus inserted minus removed chars.

use crate::editor::indent::IndentEngine;
use crate::editor::locate::locate_line;
use crate::editor::{insert_at, remove_range, EditResult};
use crate::model::edit::{LineBreakAction, LineBreakEdit};
use crate::model::line::LineInfo;

/// Chooses the line break action for a caret described by `line`.
pub fn classify_line_break(line: &LineInfo) -> LineBreakAction {
    let text_len = line.char_len();

    if line.indent_width > 0 && text_len == line.indent_width && line.column == line.indent_width
    {
        return LineBreakAction::Outdent;
    }
    if !line.bullet.is_none() && text_len == line.content_column() && line.at_line_end() {
        return LineBreakAction::StripBullet;
    }
    if line.column >= line.content_column() {
        return LineBreakAction::ContinueIndentAndBullet;
    }
    if !line.bullet.is_none() && line.column == line.indent_width {
        return LineBreakAction::ContinueIndentOnly;
    }
    // Caret inside the indentation: plain break with indent carry.
    LineBreakAction::ContinueIndentAndBullet
}

/// Applies a line break request at `cursor`.
///
/// # Errors
/// - `EditError::OutOfRange` when `cursor` is past the buffer end.
pub fn on_line_break(
    engine: &IndentEngine,
    buffer: &str,
    cursor: usize,
) -> EditResult<LineBreakEdit> {
    let line = locate_line(buffer, cursor)?;
    let action = classify_line_break(&line);

    let (updated_buffer, new_cursor) = match action {
        LineBreakAction::Outdent => {
            let edit = engine.decrease_indent_at_line(buffer, line.begin_offset, line.indent_width)?;
            let new_cursor = edit.translate(cursor);
            (edit.updated_buffer, new_cursor)
        }
        LineBreakAction::StripBullet => {
            let bullet_start = cursor - line.bullet.char_len();
            (remove_range(buffer, bullet_start, cursor), bullet_start)
        }
        LineBreakAction::ContinueIndentAndBullet => {
            let inserted = format!("\n{}{}", " ".repeat(line.indent_width), line.bullet.as_str());
            continue_with(buffer, cursor, &inserted)
        }
        LineBreakAction::ContinueIndentOnly => {
            let inserted = format!("\n{}", " ".repeat(line.indent_width));
            continue_with(buffer, cursor, &inserted)
        }
    };

    Ok(LineBreakEdit {
        updated_buffer,
        cursor: new_cursor,
        action,
    })
}

fn continue_with(buffer: &str, cursor: usize, inserted: &str) -> (String, usize) {
    (
        insert_at(buffer, cursor, inserted),
        cursor + inserted.chars().count(),
    )
}
