//! Logical line lookup.
//!
//! # Invariants
//! - Every offset in `0..=len` belongs to exactly one line; the empty buffer
//!   is one empty line numbered 1.
//! - An offset equal to a line's `begin_offset` belongs to that line, not to
//!   the trailing edge of the previous one.

use crate::editor::{ensure_in_bounds, EditResult};
use crate::model::line::{indent_width_of, Bullet, LineInfo};

/// Locates the logical line that encloses `offset`.
///
/// # Errors
/// - `EditError::OutOfRange` when `offset` exceeds the buffer length.
pub fn locate_line(buffer: &str, offset: usize) -> EditResult<LineInfo> {
    ensure_in_bounds(buffer, offset)?;

    let chars: Vec<char> = buffer.chars().collect();
    let begin_offset = chars[..offset]
        .iter()
        .rposition(|ch| *ch == '\n')
        .map_or(0, |idx| idx + 1);
    let end_offset = chars[offset..]
        .iter()
        .position(|ch| *ch == '\n')
        .map_or(chars.len(), |idx| offset + idx);
    let line_number = chars[..begin_offset]
        .iter()
        .filter(|ch| **ch == '\n')
        .count()
        + 1;

    let text: String = chars[begin_offset..end_offset].iter().collect();
    let indent_width = indent_width_of(&text);
    // Indentation is ASCII-only, so the char width is also the byte index.
    let bullet = Bullet::detect(&text[indent_width..]);

    Ok(LineInfo {
        text,
        begin_offset,
        end_offset,
        line_number,
        column: offset - begin_offset,
        indent_width,
        bullet,
    })
}
