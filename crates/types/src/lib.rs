//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input decoding).
//!
//! # Board Dimensions
//!
//! The playfield is fixed at the standard size:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn origin**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Input polling / render interval |
//! | `GRAVITY_MS` | 500 | Interval between gravity ticks |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{
//!     cell_code, cell_from_code, GameAction, PieceKind, RawEvent, BOARD_HEIGHT, BOARD_WIDTH,
//! };
//!
//! // Cells are stored as u8 codes in snapshots
//! assert_eq!(cell_from_code(cell_code(Some(PieceKind::T))), Some(PieceKind::T));
//!
//! // Raw terminal events map onto session commands
//! assert_eq!(GameAction::from(RawEvent::Up), GameAction::Rotate);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square occupancy template every piece lives in.
pub const PIECE_GRID: usize = 4;

/// Column of the template origin for a freshly spawned piece.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Row of the template origin for a freshly spawned piece.
pub const SPAWN_Y: i8 = 0;

/// Polling/render interval in milliseconds.
pub const TICK_MS: u32 = 10;

/// Gravity interval in milliseconds (one row every half second).
pub const GRAVITY_MS: u32 = 500;

/// Points per cleared line; a lock clearing `n` lines scores `n * n * LINE_CLEAR_BASE`.
pub const LINE_CLEAR_BASE: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_origin_is_centered() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn gravity_is_slower_than_polling() {
        assert!(GRAVITY_MS > TICK_MS);
        assert_eq!(GRAVITY_MS % TICK_MS, 0);
    }
}

/// The seven tetromino piece kinds
///
/// Declaration order is the catalog order; [`PieceKind::index`] and the
/// `u8` board encoding (`index + 1`, 0 = empty) follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::T => 6,
        }
    }

    /// Inverse of [`PieceKind::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Encode a cell as `u8` (0 = empty, 1..=7 = piece kind).
pub fn cell_code(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(kind) => kind.index() as u8 + 1,
    }
}

/// Decode a `u8` produced by [`cell_code`].
pub fn cell_from_code(code: u8) -> Cell {
    match code {
        0 => None,
        n => PieceKind::from_index(n as usize - 1),
    }
}

/// Discrete events produced by the input port.
///
/// Decoding terminal byte sequences (including arrow-key escapes) into these
/// is the job of the input implementation, not the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    Quit,
    Up,
    Down,
    Left,
    Right,
    HardDrop,
}

/// Commands accepted by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Nudge piece one row down; never locks
    SoftDown,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// End the session
    Quit,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDown => "softDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Quit => "quit",
        }
    }
}

impl From<RawEvent> for GameAction {
    fn from(event: RawEvent) -> Self {
        match event {
            RawEvent::Quit => GameAction::Quit,
            RawEvent::Up => GameAction::Rotate,
            RawEvent::Down => GameAction::SoftDown,
            RawEvent::Left => GameAction::MoveLeft,
            RawEvent::Right => GameAction::MoveRight,
            RawEvent::HardDrop => GameAction::HardDrop,
        }
    }
}

/// Session lifecycle. `Running -> GameOver` happens at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
}
