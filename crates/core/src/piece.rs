//! Piece module - a positioned, rotated tetromino instance

use crate::shapes::{offsets, PieceShape, ROTATIONS};
use crate::types::PieceKind;

/// A falling (or ghost, or preview) tetromino
///
/// `y` may be negative only transiently while wall kicks are tried.
/// Pieces are `Copy`: a clone is always an independent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    /// Rotation state, always in `0..4`
    pub rotation: u8,
}

impl Piece {
    /// Create a piece at the given anchor in rotation state 0
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: 0,
        }
    }

    /// Offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        offsets(self.kind, self.rotation)
    }

    /// Absolute board cells covered by this piece
    pub fn occupied_cells(&self) -> [(i32, i32); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Copy of this piece moved by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut piece = *self;
        piece.translate(dx, dy);
        piece
    }

    /// Step the rotation state by `delta` (+1 clockwise, -1 counter-clockwise).
    pub fn set_rotation(&mut self, delta: i32) {
        let next = (self.rotation as i32 + delta).rem_euclid(ROTATIONS as i32);
        self.rotation = next as u8;
    }

    pub fn rotate_clockwise(&mut self) {
        self.set_rotation(1);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.set_rotation(-1);
    }

    /// Bounding box width (used to center previews, not for collision)
    pub fn width(&self) -> i32 {
        let cells = self.occupied_cells();
        let min = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let max = cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        max - min + 1
    }

    /// Bounding box height (used to center previews, not for collision)
    pub fn height(&self) -> i32 {
        let cells = self.occupied_cells();
        let min = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let max = cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
        max - min + 1
    }
}
