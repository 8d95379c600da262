//! Use-case services over the editing engine.
//!
//! # Responsibility
//! - Hold the note buffer and selection a UI binding pushes keys into.
//! - Derive buffer consumers such as tag lists.

pub mod editor_session;
pub mod tags;
