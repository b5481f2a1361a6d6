//! Shapes module - the static tetromino offset table
//!
//! Every kind has 4 rotation states; each state is 4 `(dx, dy)` offsets from the
//! piece anchor, with `dy` growing downwards. The rotation system is
//! simple: rotation only swaps offset sets, no per-state anchor correction, and
//! the I piece alternates between a vertical and a horizontal strip.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Number of rotation states per kind
pub const ROTATIONS: usize = 4;

/// Offsets indexed by `[kind.index()][rotation]`
static SHAPES: [[PieceShape; ROTATIONS]; 7] = [
    // I
    [
        [(0, 0), (0, 1), (0, 2), (0, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(0, 0), (0, 1), (0, 2), (0, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
    ],
    // J
    [
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 0), (0, 1), (1, 0), (2, 0)],
        [(0, 0), (0, 1), (0, 2), (1, 2)],
        [(0, 1), (1, 1), (2, 0), (2, 1)],
    ],
    // L
    [
        [(0, 0), (0, 1), (0, 2), (1, 0)],
        [(0, 0), (1, 0), (2, 0), (2, 1)],
        [(0, 2), (1, 0), (1, 1), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
    ],
    // O
    [
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
    ],
    // S
    [
        [(0, 1), (0, 2), (1, 0), (1, 1)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(0, 1), (0, 2), (1, 0), (1, 1)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(0, 1), (1, 0), (1, 1), (1, 2)],
        [(0, 0), (1, 0), (1, 1), (2, 0)],
        [(0, 0), (0, 1), (0, 2), (1, 1)],
        [(0, 1), (1, 0), (1, 1), (2, 1)],
    ],
    // Z
    [
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 1), (1, 0), (1, 1), (2, 0)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 1), (1, 0), (1, 1), (2, 0)],
    ],
];

/// Get the offsets for a piece kind and rotation state.
///
/// `rotation` is taken modulo 4, so any index is accepted.
pub fn offsets(kind: PieceKind, rotation: u8) -> PieceShape {
    SHAPES[kind.index()][rotation as usize % ROTATIONS]
}

/// Get the spawn (rotation 0) offsets for a kind
pub fn spawn_offsets(kind: PieceKind) -> PieceShape {
    offsets(kind, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_four_distinct_minos() {
        for kind in PieceKind::ALL {
            for rotation in 0..ROTATIONS as u8 {
                let shape = offsets(kind, rotation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j], "{:?} r{} repeats a mino", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_o_piece_identical_across_rotations() {
        let base = offsets(PieceKind::O, 0);
        for rotation in 1..4 {
            assert_eq!(offsets(PieceKind::O, rotation), base);
        }
    }

    #[test]
    fn test_i_piece_alternates_vertical_horizontal() {
        assert_eq!(offsets(PieceKind::I, 0), [(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(offsets(PieceKind::I, 1), [(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(offsets(PieceKind::I, 2), offsets(PieceKind::I, 0));
        assert_eq!(offsets(PieceKind::I, 3), offsets(PieceKind::I, 1));
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(offsets(PieceKind::T, 4), offsets(PieceKind::T, 0));
        assert_eq!(offsets(PieceKind::T, 7), offsets(PieceKind::T, 3));
    }

    #[test]
    fn test_offsets_are_non_negative() {
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                assert!(offsets(kind, rotation)
                    .iter()
                    .all(|&(dx, dy)| dx >= 0 && dy >= 0));
            }
        }
    }
}
