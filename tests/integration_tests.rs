//! Integration tests for the turn sequence
//!
//! Drives `GameState` through `apply_action` the way the terminal loop does.

use mintris::core::{Anchor, GameState, SequenceRng, TurnPhase};
use mintris::types::{Cell, Color, Direction, GameAction, FIELD_HEIGHT, FIELD_WIDTH};

const RED: Cell = Cell::Filled(Color::Red);
const GREEN: Cell = Cell::Filled(Color::Green);
const BLUE: Cell = Cell::Filled(Color::Blue);

fn scripted(draws: &[u32]) -> GameState<SequenceRng> {
    GameState::with_rng(SequenceRng::new(draws.iter().copied()))
}

#[test]
fn test_spawn_places_three_cells_around_hole() {
    let game = scripted(&[4, 0, 0]);

    assert_eq!(game.anchor(), Anchor::new(0, 4));
    assert_eq!(game.field()[(0, 4)], Cell::Empty);
    assert_eq!(game.field()[(0, 5)], RED);
    assert_eq!(game.field()[(1, 4)], RED);
    assert_eq!(game.field()[(1, 5)], RED);
    assert_eq!(game.phase(), TurnPhase::AwaitingInput);
}

#[test]
fn test_every_spawn_fits_the_field() {
    for col in 0..(FIELD_WIDTH as u32 + 5) {
        for hole in 0..4 {
            let game = scripted(&[col, 1, hole]);
            let anchor = game.anchor();
            assert!(anchor.col + 1 < FIELD_WIDTH);
            assert_eq!(anchor.row, 0);
            assert_eq!(game.field().filled_count(), 3);
            for (r, c) in anchor.window() {
                let cell = game.field()[(r, c)];
                assert!(cell.is_empty() || cell == GREEN);
            }
        }
    }
}

#[test]
fn test_move_sequence() {
    let mut game = scripted(&[4, 0, 3]);

    assert!(game.apply_action(GameAction::MoveLeft));
    assert!(game.apply_action(GameAction::MoveLeft));
    assert!(game.apply_action(GameAction::MoveDown));
    assert_eq!(game.anchor(), Anchor::new(1, 2));

    assert!(game.apply_action(GameAction::MoveRight));
    assert_eq!(game.anchor(), Anchor::new(1, 3));
    assert_eq!(game.field().filled_count(), 3);
}

#[test]
fn test_blocked_move_reports_no_change() {
    let mut game = scripted(&[0, 0, 0]);
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.anchor(), Anchor::new(0, 0));
}

#[test]
fn test_hard_drop_lands_and_spawns() {
    let mut game = scripted(&[4, 2, 0]);

    assert!(game.apply_action(GameAction::HardDrop));

    // Landed piece keeps its shape on the floor.
    assert_eq!(game.field()[(FIELD_HEIGHT - 2, 4)], Cell::Empty);
    assert_eq!(game.field()[(FIELD_HEIGHT - 2, 5)], BLUE);
    assert_eq!(game.field()[(FIELD_HEIGHT - 1, 4)], BLUE);
    assert_eq!(game.field()[(FIELD_HEIGHT - 1, 5)], BLUE);

    // The next piece is waiting at the top.
    assert_eq!(game.anchor(), Anchor::new(0, 4));
    assert_eq!(game.field().filled_count(), 6);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_pieces_stack() {
    let mut game = scripted(&[4, 0, 0]);

    game.apply_action(GameAction::HardDrop);
    game.apply_action(GameAction::HardDrop);

    // The second piece rests on the first.
    assert_eq!(game.field()[(FIELD_HEIGHT - 3, 4)], RED);
    assert_eq!(game.field()[(FIELD_HEIGHT - 3, 5)], RED);
    assert_eq!(game.field().filled_count(), 9);
}

#[test]
fn test_landed_piece_spawns_on_next_action() {
    let mut game = scripted(&[4, 0, 0]);

    while game.try_move(Direction::Down) {}
    assert_eq!(game.phase(), TurnPhase::Landed);

    // A blocked move still ends the turn.
    game.apply_action(GameAction::MoveDown);

    assert_eq!(game.phase(), TurnPhase::AwaitingInput);
    assert_eq!(game.anchor(), Anchor::new(0, 4));
    assert_eq!(game.field().filled_count(), 6);
}

#[test]
fn test_rotate_action() {
    let mut game = scripted(&[4, 0, 0]);

    assert!(game.apply_action(GameAction::Rotate));

    // Hole moved from top-left to bottom-left.
    assert_eq!(game.field()[(0, 4)], RED);
    assert_eq!(game.field()[(1, 4)], Cell::Empty);
    assert_eq!(game.anchor(), Anchor::new(0, 4));
}

#[test]
fn test_new_game_resets_score_and_field() {
    let mut game = scripted(&[0, 0, 0]);
    game.field_mut().fill_row(FIELD_HEIGHT - 1, GREEN);
    game.field_mut().set(FIELD_HEIGHT - 1, 0, Cell::Empty);
    game.field_mut().set(FIELD_HEIGHT - 2, 1, GREEN);

    assert!(game.apply_action(GameAction::NewGame));

    assert_eq!(game.score(), 0);
    assert_eq!(game.field().filled_count(), 3);
    assert_eq!(game.anchor(), Anchor::new(0, 0));
}

#[test]
fn test_debug_layout_cells() {
    let mut game = scripted(&[0, 0, 0]);

    assert!(game.apply_action(GameAction::DebugLayout));
    let field = game.field();

    let mid = FIELD_WIDTH / 2;
    for row in 3..FIELD_HEIGHT - 2 {
        assert_eq!(field[(row, mid)], BLUE, "row {}", row);
    }
    assert_eq!(field[(2, mid)], Cell::Empty);

    for row in FIELD_HEIGHT - 2..FIELD_HEIGHT {
        for col in 0..FIELD_WIDTH {
            let hole = matches!((row, col), (19, 0) | (18, 0) | (18, 1));
            let expected = if hole { Cell::Empty } else { RED };
            assert_eq!(field[(row, col)], expected, "({}, {})", row, col);
        }
    }

    // Fresh piece at the top-left.
    assert_eq!(game.anchor(), Anchor::new(0, 0));
    assert_eq!(field[(0, 0)], Cell::Empty);
    assert_eq!(field[(0, 1)], RED);
    assert_eq!(field.filled_count(), 15 + 17 + 3);
}

#[test]
fn test_quit_leaves_game_untouched() {
    let mut game = scripted(&[4, 0, 0]);
    let before = game.snapshot();

    assert!(!game.apply_action(GameAction::Quit));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::HardDrop,
    ];

    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for action in actions {
        a.apply_action(action);
        b.apply_action(action);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_drop_into_gap_clears_row_and_scores() {
    let mut game = scripted(&[0, 0, 0]);
    for col in 2..FIELD_WIDTH {
        game.field_mut().set(FIELD_HEIGHT - 1, col, GREEN);
    }

    game.apply_action(GameAction::HardDrop);

    let snap = game.snapshot();
    assert_eq!(snap.score, 1);
    // Top-right piece cell is all that is left of the landed piece.
    assert_eq!(snap.cell(FIELD_HEIGHT - 1, 0), Some(Cell::Empty));
    assert_eq!(snap.cell(FIELD_HEIGHT - 1, 1), Some(RED));
    assert_eq!(snap.filled_count(), 1 + 3);
}
