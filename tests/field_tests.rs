//! Field tests

use mintris::core::Field;
use mintris::types::{Cell, Color, FIELD_HEIGHT, FIELD_WIDTH};

#[test]
fn test_field_new_empty() {
    let field = Field::new();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);

    for row in 0..FIELD_HEIGHT {
        for col in 0..FIELD_WIDTH {
            assert!(field.is_open(row, col), "Cell ({}, {}) should be open", row, col);
            assert_eq!(field.get(row, col), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_clear_empties_every_cell() {
    let mut field = Field::new();
    for row in (0..FIELD_HEIGHT).step_by(3) {
        field.fill_row(row, Cell::Filled(Color::Green));
    }
    field.set(7, 7, Cell::from_code(77));

    field.clear();

    assert_eq!(field.filled_count(), 0);
    for row in 0..FIELD_HEIGHT {
        for col in 0..FIELD_WIDTH {
            assert_eq!(field[(row, col)], Cell::Empty);
        }
    }
}

#[test]
fn test_field_get_out_of_bounds() {
    let field = Field::new();

    assert_eq!(field.get(FIELD_HEIGHT, 0), None);
    assert_eq!(field.get(0, FIELD_WIDTH), None);
    assert_eq!(field.get(usize::MAX, usize::MAX), None);
}

#[test]
fn test_field_set_and_get() {
    let mut field = Field::new();

    assert!(field.set(10, 5, Cell::Filled(Color::Blue)));
    assert_eq!(field.get(10, 5), Some(Cell::Filled(Color::Blue)));

    assert!(field.set(0, 0, Cell::Filled(Color::Red)));
    assert_eq!(field.get(0, 0), Some(Cell::Filled(Color::Red)));

    assert!(field.set(10, 5, Cell::Empty));
    assert_eq!(field.get(10, 5), Some(Cell::Empty));
}

#[test]
fn test_field_set_out_of_bounds_leaves_field_untouched() {
    let mut field = Field::new();

    assert!(!field.set(FIELD_HEIGHT, 0, Cell::Filled(Color::Red)));
    assert!(!field.set(0, FIELD_WIDTH, Cell::Filled(Color::Red)));
    assert_eq!(field.filled_count(), 0);
}

#[test]
fn test_open_and_blocked() {
    let mut field = Field::new();

    assert!(field.is_open(5, 5));
    assert!(!field.is_blocked(5, 5));

    field.set(5, 5, Cell::Filled(Color::Red));
    assert!(!field.is_open(5, 5));
    assert!(field.is_blocked(5, 5));

    // Outside the grid is solid.
    assert!(field.is_blocked(FIELD_HEIGHT, 0));
    assert!(field.is_blocked(0, FIELD_WIDTH));
}

#[test]
fn test_invalid_codes_are_stored_as_invalid_marker() {
    let mut codes = [[0u8; FIELD_WIDTH]; FIELD_HEIGHT];
    codes[19][0] = 4;
    codes[19][1] = 255;
    codes[19][2] = 3;

    let field = Field::from_codes(&codes);

    assert_eq!(field[(19, 0)], Cell::Filled(Color::Invalid));
    assert_eq!(field[(19, 1)], Cell::Filled(Color::Invalid));
    assert_eq!(field[(19, 2)], Cell::Filled(Color::Blue));
    // The marker counts as filled, never as empty.
    assert_eq!(field.filled_count(), 3);
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_fails_fast() {
    let mut field = Field::new();
    field[(0, FIELD_WIDTH)] = Cell::Filled(Color::Red);
}
