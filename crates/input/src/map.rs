//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only presses count; release and repeat events map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::MoveDown),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(c) => char_action(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Letter keys are case-insensitive: `c` is already lowercased.
fn char_action(c: char) -> Option<GameAction> {
    let action = match c {
        'a' | 'h' => GameAction::MoveLeft,
        'd' | 'l' => GameAction::MoveRight,
        's' | 'j' => GameAction::MoveDown,
        'w' | 'k' => GameAction::Rotate,
        ' ' => GameAction::HardDrop,
        'n' => GameAction::NewGame,
        't' => GameAction::DebugLayout,
        _ => return None,
    };
    Some(action)
}

/// `q` in either case, or Ctrl+C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
