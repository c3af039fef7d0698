//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Scripted piece order via [`SequenceGenerator`]
//! - **Portable**: Runs under any input/render implementation
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with the blocking query, merge, and line clearing
//! - [`pieces`]: the seven 4x4 templates and the clockwise grid rotation
//! - [`active`]: the falling piece and its candidate moves
//! - [`collision`]: the single placement predicate
//! - [`rng`]: uniform piece selection
//! - [`scoring`]: `n² × 100` line-clear points
//! - [`session`]: the Running/GameOver state machine
//! - [`snapshot`]: plain-data frame for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn is an independent pick of one of 7 kinds
//! - **Fixed rotation**: clockwise only, rejected on collision (no wall kicks)
//! - **Instant lock**: gravity locks as soon as the piece cannot fall
//! - **Hard drop**: moves to the resting row and locks in the same command
//! - **Game over**: the freshly spawned piece collides with the stack
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{SequenceGenerator, Session};
//! use term_tetris_types::{GameAction, PieceKind};
//!
//! let mut game = Session::with_generator(Box::new(SequenceGenerator::repeat(PieceKind::O)));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```

pub mod active;
pub mod board;
pub mod collision;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, PieceCells};
pub use board::Board;
pub use collision::collides;
pub use pieces::{rotate_cw, template, Shape};
pub use rng::{PieceGenerator, SequenceGenerator, SimpleRng, UniformGenerator};
pub use scoring::line_clear_score;
pub use session::Session;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
