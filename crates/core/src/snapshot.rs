use crate::active::ActivePiece;
use crate::pieces::Shape;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_GRID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x(),
            y: value.y(),
            shape: *value.shape(),
        }
    }
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..PIECE_GRID).flat_map(move |r| {
            (0..PIECE_GRID)
                .filter(move |&c| self.shape[r][c])
                .map(move |c| (self.x + c as i8, self.y + r as i8))
        })
    }
}

/// Everything the render port needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_snapshot_cells_match_piece() {
        let piece = ActivePiece::spawn(PieceKind::Z).rotated().translated(2, 7);
        let snap = ActiveSnapshot::from(piece);
        let cells: Vec<_> = snap.cells().collect();
        assert_eq!(cells.as_slice(), piece.cells().as_slice());
    }

    #[test]
    fn game_over_follows_status() {
        let mut snap = GameSnapshot::default();
        assert!(!snap.game_over());
        snap.status = GameStatus::GameOver;
        assert!(snap.game_over());
    }
}
