//! Caret/selection state threaded through editing results.

use serde::{Deserialize, Serialize};

/// Selection over a buffer, in char offsets.
///
/// A caret is a selection with `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Returns a copy with both ends clamped to `len`.
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}
