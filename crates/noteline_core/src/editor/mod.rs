//! Plain-text structural editing engine.
//!
//! # Responsibility
//! - Locate logical lines, their indentation and bullet markers.
//! - Compute indent/outdent and bullet-aware line break edits.
//! - Map editor keys onto those edits for a caret or a selection.
//!
//! # Invariants
//! - All functions are pure: they take a buffer snapshot and return a new
//!   buffer plus the caret/selection to apply.
//! - Offsets are char offsets in `0..=buffer.chars().count()`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod continuation;
pub mod indent;
pub mod input;
pub mod keymap;
pub mod locate;

pub type EditResult<T> = Result<T, EditError>;

/// Error for editing requests that no valid caller state can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Offset lies past the end of the buffer.
    OutOfRange { offset: usize, len: usize },
    /// Range or selection with `start > end`.
    InvalidRange { start: usize, end: usize },
    /// Tab stop width must be within `1..=MAX_TAB_WIDTH`.
    InvalidTabWidth(usize),
    /// Offset given as a line begin is not at column 0.
    NotLineStart { offset: usize, column: usize },
    /// Indent width given for a line differs from its leading spaces.
    IndentMismatch {
        line_begin_offset: usize,
        given: usize,
        actual: usize,
    },
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { offset, len } => {
                write!(f, "offset {offset} is out of range for buffer of length {len}")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} is after end {end}")
            }
            Self::InvalidTabWidth(width) => write!(f, "invalid tab width: {width}"),
            Self::NotLineStart { offset, column } => {
                write!(f, "offset {offset} is not a line start (column {column})")
            }
            Self::IndentMismatch {
                line_begin_offset,
                given,
                actual,
            } => write!(
                f,
                "line at {line_begin_offset} has indent {actual}, not {given}"
            ),
        }
    }
}

impl Error for EditError {}

/// Converts a char offset into a byte index of `buffer`.
///
/// Offsets at or past the end map to `buffer.len()`.
pub(crate) fn byte_index(buffer: &str, offset: usize) -> usize {
    buffer
        .char_indices()
        .nth(offset)
        .map_or(buffer.len(), |(idx, _)| idx)
}

pub(crate) fn ensure_in_bounds(buffer: &str, offset: usize) -> EditResult<usize> {
    let len = buffer.chars().count();
    if offset > len {
        return Err(EditError::OutOfRange { offset, len });
    }
    Ok(len)
}

pub(crate) fn insert_at(buffer: &str, offset: usize, text: &str) -> String {
    let idx = byte_index(buffer, offset);
    let mut updated = String::with_capacity(buffer.len() + text.len());
    updated.push_str(&buffer[..idx]);
    updated.push_str(text);
    updated.push_str(&buffer[idx..]);
    updated
}

pub(crate) fn remove_range(buffer: &str, start: usize, end: usize) -> String {
    let start_idx = byte_index(buffer, start);
    let end_idx = byte_index(buffer, end);
    let mut updated = String::with_capacity(buffer.len() - (end_idx - start_idx));
    updated.push_str(&buffer[..start_idx]);
    updated.push_str(&buffer[end_idx..]);
    updated
}
