//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game is
//! turn-based, so there is no auto-repeat handling: one key press is one
//! action.

pub mod map;

pub use mintris_types as types;

pub use map::{handle_key_event, should_quit};
