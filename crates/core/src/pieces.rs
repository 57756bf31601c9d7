//! Pieces module - tetromino shape catalog and the rotation transform
//!
//! Every shape is four offsets around a pivot at (0, 0). Rotation is not
//! tabulated: the quarter-turn transform `(x, y) -> (-y, x)` is applied to
//! the base offsets as many times as the rotation index says.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

const S_SHAPE: PieceShape = [(0, 0), (1, 0), (0, -1), (-1, -1)];
const Z_SHAPE: PieceShape = [(0, 0), (-1, 0), (0, -1), (1, -1)];
const I_SHAPE: PieceShape = [(0, 0), (-1, 0), (1, 0), (2, 0)];
const O_SHAPE: PieceShape = [(0, 0), (1, 0), (0, -1), (1, -1)];
const J_SHAPE: PieceShape = [(0, 0), (-1, 0), (1, 0), (-1, -1)];
const L_SHAPE: PieceShape = [(0, 0), (-1, 0), (1, 0), (1, -1)];
const T_SHAPE: PieceShape = [(0, 0), (-1, 0), (1, 0), (0, -1)];

/// Canonical (unrotated) offsets for a piece kind
pub fn base_offsets(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::T => T_SHAPE,
    }
}

/// Apply the quarter-turn transform `rotation.index()` times.
#[inline]
pub fn rotate_offsets(shape: PieceShape, rotation: Rotation) -> PieceShape {
    let mut out = shape;
    for _ in 0..rotation.index() {
        for cell in out.iter_mut() {
            let (x, y) = *cell;
            *cell = (-y, x);
        }
    }
    out
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    rotate_offsets(base_offsets(kind), rotation)
}
