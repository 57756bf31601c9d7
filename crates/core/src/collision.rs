//! Validity checks for pieces against the board.
//!
//! A placement is rejected when a cell leaves the side walls, drops below the
//! floor, or lands on a locked cell. There is no ceiling: cells with negative
//! `y` are allowed so pieces can spawn and rotate at the top edge.

use crate::board::Board;
use crate::tetromino::Tetromino;
use crate::types::{Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Check a single absolute cell.
#[inline]
pub fn cell_is_free(board: &Board, x: i8, y: i8) -> bool {
    if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
        return false;
    }
    y < 0 || !board.is_occupied(x, y)
}

/// Whether `piece` fits on `board` with `rotation` (default: its current rotation).
pub fn is_valid(piece: &Tetromino, board: &Board, rotation: Option<Rotation>) -> bool {
    piece
        .positions(rotation)
        .iter()
        .all(|&(x, y)| cell_is_free(board, x, y))
}

/// Whether `piece` would fit after translating by (dx, dy), without moving it.
pub fn fits_at(
    piece: &Tetromino,
    board: &Board,
    dx: i8,
    dy: i8,
    rotation: Option<Rotation>,
) -> bool {
    piece
        .positions(rotation)
        .iter()
        .all(|&(x, y)| cell_is_free(board, x + dx, y + dy))
}
