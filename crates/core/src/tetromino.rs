//! Tetromino - a positioned, rotatable instance of a catalog shape
//!
//! The piece never checks its own validity; callers ask the collision module
//! whether a position or rotation fits.

use crate::pieces::{get_shape, PieceShape};
use crate::types::{PieceKind, Rgb, Rotation, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create an unrotated tetromino anchored at (x, y)
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Offsets after applying `rotation` (default: the current rotation)
    pub fn rotated_cells(&self, rotation: Option<Rotation>) -> PieceShape {
        get_shape(self.kind, rotation.unwrap_or(self.rotation))
    }

    /// Absolute board coordinates for `rotation` (default: the current rotation)
    pub fn positions(&self, rotation: Option<Rotation>) -> PieceShape {
        self.rotated_cells(rotation)
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Advance the rotation index by one quarter turn (mod 4)
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_cw();
    }
}
