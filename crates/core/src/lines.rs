//! Line clearing
//!
//! Completed rows are found in one bottom-to-top pass. Each completed row is
//! emptied and the rows above it collapse by one. Row 0 never moves and is
//! never cleared.

use arrayvec::ArrayVec;

use crate::field::Field;
use crate::types::{Cell, FIELD_HEIGHT};

/// Row indices cleared by one pass, in visit order (bottom first)
pub type ClearedRows = ArrayVec<usize, FIELD_HEIGHT>;

/// True iff every cell in `row` is non-empty.
pub fn is_row_complete(field: &Field, row: usize) -> bool {
    field
        .row(row)
        .map(|cells| cells.iter().all(|cell| cell.is_filled()))
        .unwrap_or(false)
}

/// Clear every completed row and collapse the rows above it.
///
/// Rows are visited once, from `FIELD_HEIGHT - 1` up to 1. Completeness is
/// checked against the field as it is when the row is visited, so content
/// that collapses into an already-visited row waits for the next pass.
pub fn clear_completed_rows(field: &mut Field) -> ClearedRows {
    let mut cleared = ClearedRows::new();

    for row in (1..FIELD_HEIGHT).rev() {
        if !is_row_complete(field, row) {
            continue;
        }

        field.fill_row(row, Cell::Empty);
        if row > 1 {
            for src in (1..row).rev() {
                field.copy_row(src, src + 1);
            }
            // Row 1 moved down; row 0 stays put.
            field.fill_row(1, Cell::Empty);
        }

        tracing::debug!(row, "cleared row");
        cleared.push(row);
    }

    cleared
}
