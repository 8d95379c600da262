//! Value types shared by the structural editing engine.
//!
//! # Responsibility
//! - Describe a logical line of a note buffer (`LineInfo`, `Bullet`).
//! - Carry edit results and selection state back to the caller as data.
//!
//! # Invariants
//! - Every offset, column and width is counted in `char`s, never bytes.
//! - Values are derived views; nothing here owns or mutates a buffer.

pub mod edit;
pub mod line;
pub mod selection;
