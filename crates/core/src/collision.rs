//! Placement validity.
//!
//! [`collides`] is the only placement check in the crate. Movement, soft drop,
//! hard drop, rotation, gravity and spawn detection all go through it.

use crate::active::ActivePiece;
use crate::board::Board;

/// True iff any occupied cell of `piece` is blocked on `board`.
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece
        .cells()
        .iter()
        .any(|&(x, y)| board.is_blocking(x, y))
}
