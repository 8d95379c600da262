//! Editor session: the buffer-holding store driven by widget events.
//!
//! # Responsibility
//! - Own the note content and the widget selection.
//! - Route handled keys through the editing engine and keep state in sync.
//!
//! # Invariants
//! - `selection` always satisfies `start <= end <= content length`.
//! - Content is only replaced wholesale with the engine's returned buffer.

use crate::config::EditorConfig;
use crate::editor::indent::IndentEngine;
use crate::editor::input::normalize_input;
use crate::editor::keymap::{handle_key, EditorKey};
use crate::editor::locate::locate_line;
use crate::editor::{EditError, EditResult};
use crate::model::line::LineInfo;
use crate::model::selection::Selection;
use crate::service::tags::parse_tags;
use log::debug;

/// Note content plus selection, edited through the structural engine.
#[derive(Debug, Clone)]
pub struct EditorSession {
    content: String,
    selection: Selection,
    engine: IndentEngine,
}

impl EditorSession {
    /// Creates a session with the default tab width and the caret at the end.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_engine(content, IndentEngine::default())
    }

    /// Creates a session using `config`.
    ///
    /// # Errors
    /// - `EditError::InvalidTabWidth` when the configured width is zero.
    pub fn with_config(content: impl Into<String>, config: &EditorConfig) -> EditResult<Self> {
        Ok(Self::with_engine(content, IndentEngine::from_config(config)?))
    }

    fn with_engine(content: impl Into<String>, engine: IndentEngine) -> Self {
        let content = content.into();
        let end = content.chars().count();
        Self {
            content,
            selection: Selection::caret(end),
            engine,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Records a selection change reported by the widget.
    ///
    /// # Errors
    /// - `EditError::InvalidRange` when `start > end`.
    /// - `EditError::OutOfRange` when `end` is past the content end.
    pub fn set_selection(&mut self, start: usize, end: usize) -> EditResult<()> {
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }
        let len = self.content.chars().count();
        if end > len {
            return Err(EditError::OutOfRange { offset: end, len });
        }
        self.selection = Selection::new(start, end);
        Ok(())
    }

    /// Replaces the content after a native widget edit.
    ///
    /// `selection` is given against the raw widget text. Full-width spaces
    /// are normalized and each selection end moves by the replacements
    /// before it.
    ///
    /// # Errors
    /// - `EditError::InvalidRange` when `selection.start > selection.end`;
    ///   state is left untouched.
    pub fn replace_content(&mut self, text: &str, selection: Selection) -> EditResult<()> {
        if selection.start > selection.end {
            return Err(EditError::InvalidRange {
                start: selection.start,
                end: selection.end,
            });
        }
        let normalized = normalize_input(text);
        let len = normalized.text.chars().count();
        let translated = Selection::new(
            normalized.translate(selection.start),
            normalized.translate(selection.end),
        );
        self.content = normalized.text;
        self.selection = translated.clamped(len);
        Ok(())
    }

    /// Applies `key` if the engine handles it.
    ///
    /// Returns `false` when the widget should run its default action.
    ///
    /// # Errors
    /// - Propagates engine errors; state is left untouched on error.
    pub fn press(&mut self, key: EditorKey) -> EditResult<bool> {
        let Some(edit) = handle_key(&self.engine, &self.content, self.selection, key)? else {
            return Ok(false);
        };
        debug!(
            "event=key_handled module=editor key={} caret={} sel_start={} sel_end={}",
            key.as_str(),
            self.selection.is_caret(),
            edit.selection.start,
            edit.selection.end
        );
        self.content = edit.updated_buffer;
        self.selection = edit.selection;
        Ok(true)
    }

    /// Line holding the selection start.
    pub fn current_line(&self) -> EditResult<LineInfo> {
        locate_line(&self.content, self.selection.start)
    }

    /// Tags declared in the current content.
    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.content)
    }
}
