use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH};

/// Read-only view of a game for presentation.
///
/// Cells are carried as wire codes (see [`Cell::from_code`]); a renderer must
/// decode them with [`GameSnapshot::cell`] so unknown codes come out as the
/// invalid marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub field: [[u8; FIELD_WIDTH]; FIELD_HEIGHT],
    pub score: u32,
}

impl GameSnapshot {
    /// Decoded cell at (row, col); None if out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.field
            .get(row)
            .and_then(|line| line.get(col))
            .map(|&code| Cell::from_code(code))
    }

    pub fn filled_count(&self) -> usize {
        self.field
            .iter()
            .flatten()
            .filter(|&&code| Cell::from_code(code).is_filled())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[0u8; FIELD_WIDTH]; FIELD_HEIGHT],
            score: 0,
        }
    }
}
