//! Board module - the locked-cell map
//!
//! The board is a 10x20 grid where each cell is empty or filled by a piece kind
//! (which also fixes its color). Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Negative rows are above the visible area and can never hold a locked cell.

use arrayvec::ArrayVec;

use crate::types::{Cell, ColorGrid, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is outside the visible grid
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    fn clear_row_cells(&mut self, y: usize) {
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        for cell in &mut self.cells[start..end] {
            *cell = None;
        }
    }

    /// Remove every full row and drop the rows above into the gaps.
    ///
    /// Each surviving row moves down by the number of cleared rows strictly
    /// below it, so non-contiguous clears collapse correctly. Rows are
    /// relocated bottom to top, which never overwrites a row that has not
    /// moved yet. Returns the cleared row indices, bottom to top; an empty
    /// result means the board was not touched.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(y) {
                cleared.push(y);
            }
        }
        if cleared.is_empty() {
            return cleared;
        }

        for &y in &cleared {
            self.clear_row_cells(y);
        }

        let width = BOARD_WIDTH as usize;
        for y in (0..BOARD_HEIGHT as usize).rev() {
            let shift = cleared.iter().filter(|&&row| row > y).count();
            if shift == 0 || cleared.contains(&y) {
                continue;
            }
            let src_start = y * width;
            let dst_start = (y + shift) * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
            self.clear_row_cells(y);
        }

        cleared
    }

    /// Iterate the locked-cell map as `((x, y), kind)` pairs, row-major.
    pub fn locked_cells(&self) -> impl Iterator<Item = ((i8, i8), PieceKind)> + '_ {
        let width = BOARD_WIDTH as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|kind| (((idx % width) as i8, (idx / width) as i8), kind))
        })
    }

    /// Number of occupied cells
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the locked cells' colors into a render grid (empty cells become `None`).
    pub fn write_color_grid(&self, out: &mut ColorGrid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * width + x].map(|kind| kind.color());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                let end = start + width;
                self.cells[start..end].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
