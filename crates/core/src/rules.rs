//! Movement and rotation rules for the 2x2 piece window
//!
//! A piece has no shape object: it is whatever is filled inside the 2x2
//! window whose top-left corner is the [`Anchor`]. These functions decide
//! whether the window may shift, and apply shifts and rotations directly to
//! the field.
//!
//! The legality rules are column-local probes tuned for 2x2 pieces. They do
//! not generalize to other shapes and they assume the current position is
//! already legal.

use crate::field::Field;
use crate::types::{Cell, Direction, FIELD_HEIGHT, FIELD_WIDTH};

/// Top-left corner of the active piece's 2x2 window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

impl Anchor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Anchor one step in `direction` (clamped at row/col 0)
    pub fn shifted(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add_signed(dr),
            col: self.col.saturating_add_signed(dc),
        }
    }

    /// Window cells in row-major order: top-left, top-right, bottom-left,
    /// bottom-right
    pub fn window(&self) -> [(usize, usize); 4] {
        let Anchor { row, col } = *self;
        [(row, col), (row, col + 1), (row + 1, col), (row + 1, col + 1)]
    }
}

/// Check whether the piece at `anchor` may move one cell in `direction`.
pub fn is_legal(field: &Field, anchor: Anchor, direction: Direction) -> bool {
    let Anchor { row, col } = anchor;
    let filled = |r: usize, c: usize| field.is_blocked(r, c);

    // Window must stay on the field.
    let off_field = match direction {
        Direction::Left => col == 0,
        Direction::Right => col + 2 >= FIELD_WIDTH,
        Direction::Down => row + 2 >= FIELD_HEIGHT,
    };
    if off_field {
        return false;
    }

    // A solid 2x2 has nothing left to push through.
    if anchor.window().iter().all(|&(r, c)| filled(r, c)) {
        return false;
    }

    // Bottom cell of a column sitting on a filled cell. Checked for every
    // direction.
    for c in [col, col + 1] {
        if filled(row + 1, c) && filled(row + 2, c) {
            return false;
        }
    }

    match direction {
        Direction::Right => !(row..=row + 1).any(|r| filled(r, col + 1) && filled(r, col + 2)),
        Direction::Left => !(row..=row + 1).any(|r| filled(r, col) && filled(r, col - 1)),
        Direction::Down => true,
    }
}

/// Leading-edge cells paired with the trailing-edge cell behind each of them.
fn edge_pairs(anchor: Anchor, direction: Direction) -> [((usize, usize), (usize, usize)); 2] {
    let Anchor { row, col } = anchor;
    match direction {
        Direction::Left => [
            ((row, col), (row, col + 1)),
            ((row + 1, col), (row + 1, col + 1)),
        ],
        Direction::Right => [
            ((row, col + 1), (row, col)),
            ((row + 1, col + 1), (row + 1, col)),
        ],
        Direction::Down => [
            ((row + 1, col), (row, col)),
            ((row + 1, col + 1), (row, col + 1)),
        ],
    }
}

/// Move the piece one cell in `direction` without checking legality.
///
/// A leading cell only lands on an empty destination: a settled block is
/// never overwritten and an empty piece cell never erases anything. Cells
/// vacated by the move become empty. Returns the new anchor.
pub fn shift(field: &mut Field, anchor: Anchor, direction: Direction) -> Anchor {
    let (dr, dc) = direction.delta();

    for (lead, trail) in edge_pairs(anchor, direction) {
        let mover = field[lead];
        if mover.is_filled() {
            let dest = lead
                .0
                .checked_add_signed(dr)
                .zip(lead.1.checked_add_signed(dc));
            if let Some((r, c)) = dest {
                if field.is_open(r, c) {
                    field.set(r, c, mover);
                }
            }
        }

        field[lead] = field[trail];
        field[trail] = Cell::Empty;
    }

    anchor.shifted(direction)
}

/// Rotate the window contents by 90 degrees. No legality check.
///
/// top-left <- top-right <- bottom-right <- bottom-left <- top-left
///
/// # Panics
///
/// If the window at `anchor` is not fully on the field.
pub fn rotate(field: &mut Field, anchor: Anchor) {
    let [top_left, top_right, bottom_left, bottom_right] = anchor.window();

    let temp = field[top_left];
    field[top_left] = field[top_right];
    field[top_right] = field[bottom_right];
    field[bottom_right] = field[bottom_left];
    field[bottom_left] = temp;
}
