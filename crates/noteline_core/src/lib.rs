//! Core structural editing logic for Noteline.
//! This crate is the single source of truth for indentation and bullet rules.

pub mod config;
pub mod editor;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{AppMode, EditorConfig, DEFAULT_TAB_WIDTH, MAX_TAB_WIDTH};
pub use editor::continuation::{classify_line_break, on_line_break};
pub use editor::indent::IndentEngine;
pub use editor::input::{normalize_input, NormalizedInput};
pub use editor::keymap::{handle_key, EditorKey, KeyEdit};
pub use editor::locate::locate_line;
pub use editor::{EditError, EditResult};
pub use logging::{init_logging, init_logging_for_mode, logging_status};
pub use model::edit::{shift_offset, IndentEdit, LineBreakAction, LineBreakEdit, RangeIndentEdit};
pub use model::line::{Bullet, LineInfo};
pub use model::selection::Selection;
pub use service::editor_session::EditorSession;
pub use service::tags::parse_tags;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
