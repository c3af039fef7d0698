//! Terminal input module (engine-facing).
//!
//! Decodes `crossterm` key events into [`crate::types::RawEvent`] and exposes
//! them through the engine's non-blocking [`crate::engine::InputPort`].
//! Escape-sequence parsing for arrow keys is left to crossterm.

pub mod map;
pub mod source;

pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use map::{is_quit, map_key_event};
pub use source::TerminalInput;
