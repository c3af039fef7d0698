//! Terminal rendering module.
//!
//! Snapshots are drawn into a simple framebuffer which is then flushed to the
//! terminal as a diff against the previous frame. No widget toolkit is used.
//!
//! - `game_view` is pure and testable without a terminal
//! - `encode` turns frames into command bytes without touching stdout
//! - `screen` owns the raw-mode lifecycle and implements the engine's render port

pub mod encode;
pub mod fb;
pub mod game_view;
pub mod screen;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use encode::encode_frame;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use screen::TerminalScreen;
