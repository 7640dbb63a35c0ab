//! Field module - manages the playing grid
//!
//! The field is a 20x10 grid where each cell is empty or filled with a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right).

use std::ops::{Index, IndexMut};

use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// The playing field - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; FIELD_SIZE],
        }
    }

    /// Flat offset of (row, col), None off the field
    #[inline(always)]
    fn offset(row: usize, col: usize) -> Option<usize> {
        if row >= FIELD_HEIGHT || col >= FIELD_WIDTH {
            return None;
        }
        Some(row * FIELD_WIDTH + col)
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::offset(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::offset(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Filled, or outside the grid. Walls and floor are solid.
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        !self.is_open(row, col)
    }

    /// Clear the entire field
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Set every cell of a row to `cell`
    pub fn fill_row(&mut self, row: usize, cell: Cell) {
        if let Some(cells) = self.row_mut(row) {
            cells.fill(cell);
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= FIELD_HEIGHT {
            return None;
        }
        let start = row * FIELD_WIDTH;
        Some(&self.cells[start..start + FIELD_WIDTH])
    }

    fn row_mut(&mut self, row: usize) -> Option<&mut [Cell]> {
        if row >= FIELD_HEIGHT {
            return None;
        }
        let start = row * FIELD_WIDTH;
        Some(&mut self.cells[start..start + FIELD_WIDTH])
    }

    /// Copy row `src` over row `dst`
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        if src >= FIELD_HEIGHT || dst >= FIELD_HEIGHT {
            return;
        }
        let src_start = src * FIELD_WIDTH;
        self.cells
            .copy_within(src_start..src_start + FIELD_WIDTH, dst * FIELD_WIDTH);
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Build a field from wire codes, normalizing unknown codes to the
    /// invalid marker.
    pub fn from_codes(codes: &[[u8; FIELD_WIDTH]; FIELD_HEIGHT]) -> Self {
        let mut field = Self::new();
        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                field.cells[row * FIELD_WIDTH + col] = Cell::from_code(code);
            }
        }
        field
    }

    /// Encode every cell as a wire code
    pub fn codes(&self) -> [[u8; FIELD_WIDTH]; FIELD_HEIGHT] {
        let mut out = [[0u8; FIELD_WIDTH]; FIELD_HEIGHT];
        self.write_codes(&mut out);
        out
    }

    /// Encode into an existing buffer (no allocation)
    pub fn write_codes(&self, out: &mut [[u8; FIELD_WIDTH]; FIELD_HEIGHT]) {
        for (row, line) in out.iter_mut().enumerate() {
            for (col, code) in line.iter_mut().enumerate() {
                *code = self.cells[row * FIELD_WIDTH + col].code();
            }
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail-fast access: panics on out-of-range coordinates.
impl Index<(usize, usize)> for Field {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(
            row < FIELD_HEIGHT && col < FIELD_WIDTH,
            "cell ({}, {}) outside {}x{} field",
            row,
            col,
            FIELD_HEIGHT,
            FIELD_WIDTH
        );
        &self.cells[row * FIELD_WIDTH + col]
    }
}

impl IndexMut<(usize, usize)> for Field {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(
            row < FIELD_HEIGHT && col < FIELD_WIDTH,
            "cell ({}, {}) outside {}x{} field",
            row,
            col,
            FIELD_HEIGHT,
            FIELD_WIDTH
        );
        &mut self.cells[row * FIELD_WIDTH + col]
    }
}
