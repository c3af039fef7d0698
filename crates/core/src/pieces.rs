//! Pieces module - tetromino templates and the fixed clockwise rotation
//!
//! Every piece lives in a 4x4 occupancy grid indexed `[row][col]`, row 0 at the top.
//! Rotation turns the whole grid; there are no wall kicks and no per-piece
//! pivot, so an `O` shifts inside its box when rotated.

use crate::types::{PieceKind, PIECE_GRID};

/// 4x4 occupancy grid, `[row][col]`
pub type Shape = [[bool; PIECE_GRID]; PIECE_GRID];

const X: bool = true;
const O: bool = false;

/// Canonical (spawn) templates in [`PieceKind::ALL`] order.
static TEMPLATES: [Shape; 7] = [
    // I
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    // J
    [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // L
    [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // O
    [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // S
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // Z
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // T
    [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
];

/// Canonical template for a piece kind.
pub fn template(kind: PieceKind) -> &'static Shape {
    &TEMPLATES[kind.index()]
}

/// Rotate a shape 90° clockwise: source `(r, c)` lands at `(c, 3 - r)`.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let mut out = [[false; PIECE_GRID]; PIECE_GRID];
    for (r, row) in shape.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            out[c][PIECE_GRID - 1 - r] = filled;
        }
    }
    out
}

/// Number of occupied cells in a shape.
pub fn filled_count(shape: &Shape) -> usize {
    shape.iter().flatten().filter(|&&filled| filled).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(filled_count(template(kind)), 4, "{:?}", kind);
        }
    }

    #[test]
    fn i_rotates_into_column_two() {
        let rotated = rotate_cw(template(PieceKind::I));
        for (r, row) in rotated.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                assert_eq!(filled, c == 2, "cell ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn t_points_right_after_one_turn() {
        let rotated = rotate_cw(template(PieceKind::T));
        let expected: Shape = [
            [O, O, X, O],
            [O, O, X, X],
            [O, O, X, O],
            [O, O, O, O],
        ];
        assert_eq!(rotated, expected);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let start = *template(kind);
            let mut shape = start;
            for _ in 0..4 {
                shape = rotate_cw(&shape);
            }
            assert_eq!(shape, start, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_preserves_mino_count() {
        for kind in PieceKind::ALL {
            let mut shape = *template(kind);
            for _ in 0..3 {
                shape = rotate_cw(&shape);
                assert_eq!(filled_count(&shape), 4);
            }
        }
    }
}
