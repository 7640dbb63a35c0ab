//! Game state module - owns the field, the active piece anchor and the score
//!
//! This is the turn controller: every player action is applied through
//! [`GameState::apply_action`], which validates moves, commits them, clears
//! lines, and spawns the next piece once the current one has landed.

use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::field::Field;
use crate::lines::{self, ClearedRows};
use crate::rng::{self, RandomSource};
use crate::rules::{self, Anchor};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Where the active piece is in its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The piece still has a legal Down move
    AwaitingInput,
    /// No legal Down move; the next action spawns a new piece
    Landed,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = StdRng> {
    field: Field,
    anchor: Anchor,
    score: u32,
    rng: R,
}

impl GameState<StdRng> {
    /// Start a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed))
    }

    /// Start a new game seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(rng::from_entropy())
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a new game drawing spawns from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            field: Field::new(),
            anchor: Anchor::default(),
            score: 0,
            rng,
        };
        state.new_game();
        state
    }

    /// Resume from a prepared field with the active piece at `anchor`.
    ///
    /// The field is taken as is: the window at `anchor` is assumed to hold
    /// the piece.
    pub fn with_field(field: Field, anchor: Anchor, rng: R) -> Self {
        Self {
            field,
            anchor,
            score: 0,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Direct field access for fixtures
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn phase(&self) -> TurnPhase {
        if self.is_landed() {
            TurnPhase::Landed
        } else {
            TurnPhase::AwaitingInput
        }
    }

    /// True when the active piece has no legal Down move
    pub fn is_landed(&self) -> bool {
        !self.can_move(Direction::Down)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        rules::is_legal(&self.field, self.anchor, direction)
    }

    /// Clear the field, reset the score and spawn the first piece
    pub fn new_game(&mut self) {
        self.field.clear();
        self.score = 0;
        info!("new game");
        self.spawn_piece();
    }

    /// Spawn a random piece in the top two rows.
    ///
    /// Draws, in order: column in `[0, FIELD_WIDTH - 1)`, color index, and the
    /// window cell (row-major 0..4) left empty. Cells already in the window
    /// are overwritten.
    pub fn spawn_piece(&mut self) -> Anchor {
        let col = self.rng.next_below((FIELD_WIDTH - 1) as u32) as usize;
        let color = Color::PLAYABLE[self.rng.next_below(NUM_COLORS as u32) as usize];

        let anchor = Anchor::new(0, col);
        let window = anchor.window();
        for &cell in &window {
            self.field[cell] = Cell::Filled(color);
        }

        let hole = self.rng.next_below(window.len() as u32) as usize;
        self.field[window[hole]] = Cell::Empty;

        self.anchor = anchor;
        debug!(col, color = color.as_str(), hole, "spawned piece");
        anchor
    }

    /// Move the active piece if the move is legal.
    ///
    /// Every committed move is followed by a line-clear pass. Returns whether
    /// the piece moved.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if !rules::is_legal(&self.field, self.anchor, direction) {
            trace!(direction = direction.as_str(), "move blocked");
            return false;
        }

        self.anchor = rules::shift(&mut self.field, self.anchor, direction);
        self.clear_lines();
        true
    }

    /// Drop the piece until it lands. Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(Direction::Down) {
            rows += 1;
        }
        rows
    }

    /// Rotate the active piece's window. Always applied.
    pub fn rotate(&mut self) {
        rules::rotate(&mut self.field, self.anchor);
    }

    /// Run a line-clear pass and add the cleared rows to the score
    pub fn clear_lines(&mut self) -> ClearedRows {
        let cleared = lines::clear_completed_rows(&mut self.field);
        self.score = self.score.saturating_add(cleared.len() as u32);
        cleared
    }

    /// Load the fixed debug layout and spawn a piece.
    ///
    /// Column `FIELD_WIDTH / 2` is blue from row 3 down; the bottom two rows
    /// are red except for three holes at the left edge. The score is kept.
    pub fn load_debug_layout(&mut self) {
        self.field.clear();

        let mid = FIELD_WIDTH / 2;
        for row in 3..FIELD_HEIGHT {
            self.field[(row, mid)] = Cell::Filled(Color::Blue);
        }
        for row in FIELD_HEIGHT - 2..FIELD_HEIGHT {
            self.field.fill_row(row, Cell::Filled(Color::Red));
        }

        let last = FIELD_HEIGHT - 1;
        self.field[(last, 0)] = Cell::Empty;
        self.field[(last - 1, 1)] = Cell::Empty;
        self.field[(last - 1, 0)] = Cell::Empty;

        info!("debug layout loaded");
        self.spawn_piece();
    }

    /// If the active piece has landed, clear lines and spawn the next piece.
    /// Returns whether a new piece was spawned.
    pub fn advance_if_landed(&mut self) -> bool {
        if !self.is_landed() {
            return false;
        }
        self.clear_lines();
        self.spawn_piece();
        true
    }

    /// Apply one player action, then advance the turn if the piece landed.
    ///
    /// Returns whether the action itself changed the game. `Quit` is left to
    /// the caller and does nothing here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        trace!(action = action.as_str(), "apply action");

        let changed = match action {
            GameAction::MoveLeft => self.try_move(Direction::Left),
            GameAction::MoveRight => self.try_move(Direction::Right),
            GameAction::MoveDown => self.try_move(Direction::Down),
            GameAction::HardDrop => self.hard_drop() > 0,
            GameAction::Rotate => {
                self.rotate();
                true
            }
            GameAction::NewGame => {
                self.new_game();
                true
            }
            GameAction::DebugLayout => {
                self.load_debug_layout();
                true
            }
            GameAction::Quit => return false,
        };

        self.advance_if_landed();
        changed
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_codes(&mut out.field);
        out.score = self.score;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
