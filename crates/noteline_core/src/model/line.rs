//! Logical line view over a note buffer.
//!
//! # Responsibility
//! - Define the derived `LineInfo` record returned by line lookup.
//! - Own the closed set of bullet markers and their match order.
//!
//! # Invariants
//! - `begin_offset <= begin_offset + column <= end_offset`.
//! - `indent_width` counts leading ASCII spaces only; a tab stops the scan.
//! - A non-empty bullet starts exactly at `indent_width` inside `text`.

use serde::{Deserialize, Serialize};

/// Bullet marker recognized right after a line's indentation.
///
/// Serialized as the marker text itself, so `Bullet::None` is `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Bullet {
    /// No marker follows the indentation.
    #[default]
    #[serde(rename = "")]
    None,
    /// `"* "`
    #[serde(rename = "* ")]
    Asterisk,
    /// `"- "`
    #[serde(rename = "- ")]
    Hyphen,
    /// `"・"` (katakana middle dot, no trailing space).
    #[serde(rename = "・")]
    Nakaguro,
}

impl Bullet {
    /// Candidate markers in match order. The first match wins.
    pub const CANDIDATES: [Bullet; 3] = [Bullet::Asterisk, Bullet::Hyphen, Bullet::Nakaguro];

    /// Returns the marker text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Asterisk => "* ",
            Self::Hyphen => "- ",
            Self::Nakaguro => "・",
        }
    }

    /// Marker length in chars.
    pub fn char_len(self) -> usize {
        self.as_str().chars().count()
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Detects the marker at the start of `rest`.
    ///
    /// `rest` is the line text with its indentation already stripped.
    pub fn detect(rest: &str) -> Self {
        Self::CANDIDATES
            .into_iter()
            .find(|candidate| rest.starts_with(candidate.as_str()))
            .unwrap_or(Self::None)
    }
}

/// Derived description of the line enclosing one buffer offset.
///
/// Recomputed on every lookup; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInfo {
    /// Line content without the delimiting `\n`.
    pub text: String,
    /// Absolute offset of the first char of the line.
    pub begin_offset: usize,
    /// Absolute offset right after the line content (the `\n` or buffer end).
    pub end_offset: usize,
    /// 1-based line ordinal.
    pub line_number: usize,
    /// Queried offset relative to `begin_offset`.
    pub column: usize,
    /// Count of leading ASCII spaces.
    pub indent_width: usize,
    /// Marker found right after the indentation.
    pub bullet: Bullet,
}

impl LineInfo {
    /// Line length in chars.
    pub fn char_len(&self) -> usize {
        self.end_offset - self.begin_offset
    }

    /// Column where the line's own content starts (after indent and bullet).
    pub fn content_column(&self) -> usize {
        self.indent_width + self.bullet.char_len()
    }

    /// Whether the caret sits at the end of the line.
    pub fn at_line_end(&self) -> bool {
        self.column == self.char_len()
    }
}

/// Counts leading ASCII spaces of one logical line.
pub fn indent_width_of(text: &str) -> usize {
    text.chars().take_while(|ch| *ch == ' ').count()
}
