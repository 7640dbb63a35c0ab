//! Line clear tests

use mintris::core::{clear_completed_rows, is_row_complete, Anchor, Field, GameState, SequenceRng};
use mintris::types::{Cell, Color, Direction, FIELD_HEIGHT, FIELD_WIDTH};

const RED: Cell = Cell::Filled(Color::Red);
const GREEN: Cell = Cell::Filled(Color::Green);

#[test]
fn test_row_complete_detection() {
    let mut field = Field::new();
    assert!(!is_row_complete(&field, 19));

    field.fill_row(19, GREEN);
    assert!(is_row_complete(&field, 19));

    field.set(19, 9, Cell::Empty);
    assert!(!is_row_complete(&field, 19));
}

#[test]
fn test_invalid_marker_counts_toward_completion() {
    let mut field = Field::new();
    field.fill_row(19, RED);
    field.set(19, 3, Cell::from_code(9));

    assert!(is_row_complete(&field, 19));
}

#[test]
fn test_top_row_is_never_cleared() {
    let mut field = Field::new();
    field.fill_row(0, GREEN);

    let cleared = clear_completed_rows(&mut field);

    assert!(cleared.is_empty());
    assert!(is_row_complete(&field, 0));
}

#[test]
fn test_clear_collapses_rows_above() {
    let mut field = Field::new();
    field.fill_row(19, GREEN);
    field.set(18, 2, RED);
    field.set(10, 7, RED);

    let cleared = clear_completed_rows(&mut field);

    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(field[(19, 2)], RED);
    assert_eq!(field[(11, 7)], RED);
    assert_eq!(field[(18, 2)], Cell::Empty);
    assert_eq!(field[(10, 7)], Cell::Empty);
    assert_eq!(field.filled_count(), 2);
}

#[test]
fn test_row_zero_survives_collapse() {
    let mut field = Field::new();
    field.fill_row(19, GREEN);
    field.set(0, 4, RED);

    clear_completed_rows(&mut field);

    // Row 0 is not part of the collapse; row 1 is emptied.
    assert_eq!(field[(0, 4)], RED);
    assert_eq!(field[(1, 4)], Cell::Empty);
}

#[test]
fn test_move_down_completes_bottom_row() {
    let mut field = Field::new();
    for col in 1..FIELD_WIDTH {
        field.set(FIELD_HEIGHT - 1, col, GREEN);
    }
    // Piece cells (17,0), (17,1), (18,0); bottom-right of the window is empty.
    field.set(17, 0, RED);
    field.set(17, 1, RED);
    field.set(18, 0, RED);
    let before = field.filled_count();

    let mut game = GameState::with_field(field, Anchor::new(17, 0), SequenceRng::new([4, 0, 0]));

    assert!(game.try_move(Direction::Down));

    assert_eq!(game.score(), 1);
    // Piece cells that were in row 18 collapsed into row 19.
    assert_eq!(game.field()[(19, 0)], RED);
    assert_eq!(game.field()[(19, 1)], RED);
    for col in 2..FIELD_WIDTH {
        assert_eq!(game.field()[(19, col)], Cell::Empty);
    }
    assert!(game.field().row(0).unwrap().iter().all(|c| c.is_empty()));
    assert_eq!(game.field().filled_count(), before - FIELD_WIDTH);
}

#[test]
fn test_two_adjacent_rows_score_two_over_two_passes() {
    let mut field = Field::new();
    field.fill_row(18, GREEN);
    field.fill_row(19, GREEN);

    // One collapse per row visit: row 18 drops into 19 and is not revisited.
    let first = clear_completed_rows(&mut field);
    assert_eq!(first.as_slice(), &[19]);
    assert!(is_row_complete(&field, 19));

    let second = clear_completed_rows(&mut field);
    assert_eq!(second.as_slice(), &[19]);
    assert_eq!(field.filled_count(), 0);
}
