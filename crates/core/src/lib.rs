//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on terminals or I/O, which makes it:
//!
//! - **Deterministic**: spawns come from an injectable [`RandomSource`]
//! - **Testable**: every rule is a plain function over a [`Field`]
//! - **Portable**: the same state drives the terminal view, scripts and tests
//!
//! # Module Structure
//!
//! - [`field`]: 20x10 grid of cells
//! - [`rules`]: move legality, shifting and rotation of the 2x2 piece window
//! - [`lines`]: completed-row detection and collapse
//! - [`rng`]: random sources for spawning
//! - [`game_state`]: anchor, score, spawning and the turn sequence
//! - [`snapshot`]: read-only view for rendering
//!
//! # Game Rules
//!
//! - Every piece is a 2x2 window with three filled cells of one color
//! - The game is turn-based: nothing moves without a player action
//! - Rows are checked for clears after every committed move
//! - A piece that cannot move down is left in place and the next piece spawns
//!   in the top two rows
//! - One point per cleared row
//!
//! # Example
//!
//! ```
//! use mintris_core::GameState;
//! use mintris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped piece stays on the field next to a freshly spawned one.
//! assert_eq!(game.field().filled_count(), 6);
//! assert_eq!(game.anchor().row, 0);
//! ```

pub mod field;
pub mod game_state;
pub mod lines;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use mintris_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use game_state::{GameState, TurnPhase};
pub use lines::{clear_completed_rows, is_row_complete, ClearedRows};
pub use rng::{RandomSource, SequenceRng};
pub use rules::{is_legal, rotate, shift, Anchor};
pub use snapshot::GameSnapshot;
