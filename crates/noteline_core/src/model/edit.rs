//! Results returned by indent and line-break edits.
//!
//! # Invariants
//! - Every result carries a fresh buffer; inputs are never mutated.
//! - Deltas are signed char counts: positive for inserted, negative for
//!   removed, applied at the result's anchor.

use crate::model::selection::Selection;

/// Outcome of indenting or outdenting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentEdit {
    /// Buffer after the edit.
    pub updated_buffer: String,
    /// Begin offset of the edited line; spaces were added/removed here.
    pub anchor: usize,
    /// Signed count of spaces added (positive) or removed (negative).
    pub delta: isize,
}

impl IndentEdit {
    pub fn num_added(&self) -> usize {
        if self.delta > 0 {
            self.delta.unsigned_abs()
        } else {
            0
        }
    }

    pub fn num_removed(&self) -> usize {
        if self.delta < 0 {
            self.delta.unsigned_abs()
        } else {
            0
        }
    }

    /// Translates an offset held against the pre-edit buffer.
    pub fn translate(&self, offset: usize) -> usize {
        shift_offset(offset, self.anchor, self.delta)
    }
}

/// Outcome of indenting or outdenting every line touched by a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeIndentEdit {
    /// Buffer after the edit.
    pub updated_buffer: String,
    /// Delta applied to the line containing the selection start.
    pub delta_at_start: isize,
    /// Delta applied to the line containing the selection end.
    pub delta_at_end: isize,
    /// The selection translated into `updated_buffer`.
    pub selection: Selection,
}

/// Which rule a line break request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreakAction {
    /// Bare indented line: outdent instead of breaking.
    Outdent,
    /// Line holds only indent + bullet: drop the bullet instead of breaking.
    StripBullet,
    /// Break and carry indentation and bullet.
    ContinueIndentAndBullet,
    /// Caret sits before the bullet: break and carry indentation only.
    ContinueIndentOnly,
}

impl LineBreakAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outdent => "outdent",
            Self::StripBullet => "strip_bullet",
            Self::ContinueIndentAndBullet => "continue_indent_and_bullet",
            Self::ContinueIndentOnly => "continue_indent_only",
        }
    }
}

/// Outcome of a line break request at a caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreakEdit {
    pub updated_buffer: String,
    /// Collapsed caret offset in `updated_buffer`.
    pub cursor: usize,
    pub action: LineBreakAction,
}

/// Translates `offset` across an edit of `delta` chars at `anchor`.
///
/// Offsets before the anchor stay put. Offsets inside a removed span
/// collapse onto the anchor.
pub fn shift_offset(offset: usize, anchor: usize, delta: isize) -> usize {
    if offset < anchor {
        return offset;
    }
    let magnitude = delta.unsigned_abs();
    if delta >= 0 {
        offset + magnitude
    } else if offset >= anchor + magnitude {
        offset - magnitude
    } else {
        anchor
    }
}
