//! Terminal Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `term_tetris::{core,engine,input,term,types}`
//! and hosts the file logger used by the binaries.

pub mod logging;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
