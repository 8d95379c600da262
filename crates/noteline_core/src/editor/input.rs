//! Normalization of text typed into the editor widget.

/// U+3000 IDEOGRAPHIC SPACE, produced by IME input.
pub const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Normalized widget text plus where it grew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub text: String,
    /// Total chars added by normalization.
    pub delta: usize,
    /// Char offsets, in the raw text, of every replaced full-width space.
    replaced_at: Vec<usize>,
}

impl NormalizedInput {
    /// Translates an offset into the raw text to the normalized text.
    ///
    /// Only replacements before `offset` move it.
    pub fn translate(&self, offset: usize) -> usize {
        offset + self.replaced_at.iter().filter(|at| **at < offset).count()
    }
}

/// Replaces every full-width space with two ASCII spaces.
///
/// Keeps IME-typed indentation visible to the indent engine, which only
/// counts ASCII spaces.
pub fn normalize_input(text: &str) -> NormalizedInput {
    let replaced_at: Vec<usize> = text
        .chars()
        .enumerate()
        .filter(|(_, ch)| *ch == FULL_WIDTH_SPACE)
        .map(|(idx, _)| idx)
        .collect();
    let text = if replaced_at.is_empty() {
        text.to_string()
    } else {
        text.replace(FULL_WIDTH_SPACE, "  ")
    };
    NormalizedInput {
        text,
        delta: replaced_at.len(),
        replaced_at,
    }
}
