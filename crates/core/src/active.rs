//! The falling piece: kind, template origin, and its own copy of the occupancy grid.
//!
//! Candidate moves are produced as new values ([`ActivePiece::translated`],
//! [`ActivePiece::rotated`]) and only replace the committed piece once the
//! collision check passes. A candidate's origin may sit outside the board.

use arrayvec::ArrayVec;

use crate::pieces::{rotate_cw, template, Shape};
use crate::types::{PieceKind, PIECE_GRID, SPAWN_X, SPAWN_Y};

/// Absolute board coordinates of every occupied template cell (at most 16).
pub type PieceCells = ArrayVec<(i8, i8), { PIECE_GRID * PIECE_GRID }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    x: i8,
    y: i8,
    shape: Shape,
}

impl ActivePiece {
    /// New piece of `kind` at the spawn origin, canonical orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Canonical orientation at an arbitrary origin.
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            shape: *template(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Copy shifted by `(dx, dy)`; occupancy unchanged.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy turned 90° clockwise inside its 4x4 box; origin unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate_cw(&self.shape),
            ..*self
        }
    }

    /// Occupied cells translated to board coordinates, row-major order.
    pub fn cells(&self) -> PieceCells {
        let mut out = PieceCells::new();
        for (r, row) in self.shape.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    out.push((self.x + c as i8, self.y + r as i8));
                }
            }
        }
        out
    }
}
