//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, scripted input).
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn row**: 0, every piece starts in the top two rows
//!
//! # Cell Wire Codes
//!
//! Snapshots carry cells as `u8` codes:
//!
//! | Code | Cell |
//! |------|------|
//! | 0 | `Empty` |
//! | 1 | `Filled(Red)` |
//! | 2 | `Filled(Green)` |
//! | 3 | `Filled(Blue)` |
//! | anything else | `Filled(Invalid)` |
//!
//! # Examples
//!
//! ```
//! use mintris_types::{Cell, Color, GameAction, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(Cell::from_code(2), Cell::Filled(Color::Green));
//! assert_eq!(Cell::from_code(42), Cell::Filled(Color::Invalid));
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Number of playable block colors
pub const NUM_COLORS: usize = 3;

/// Block colors.
///
/// `Invalid` is the marker for a value that was not a legal color when it was
/// decoded. It is drawn, but never spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Invalid,
    Red,
    Green,
    Blue,
}

impl Color {
    /// Colors a spawned piece can take, in draw order.
    pub const PLAYABLE: [Color; NUM_COLORS] = [Color::Red, Color::Green, Color::Blue];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Invalid => "invalid",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

/// Cell on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    /// Wire code of the invalid marker.
    pub const INVALID_CODE: u8 = u8::MAX;

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Color of a filled cell
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }

    /// Decode a wire code.
    ///
    /// Codes outside the color range become `Filled(Invalid)`; they are never
    /// read as `Empty` or as a playable color.
    ///
    /// ```
    /// use mintris_types::{Cell, Color};
    ///
    /// assert_eq!(Cell::from_code(0), Cell::Empty);
    /// assert_eq!(Cell::from_code(1), Cell::Filled(Color::Red));
    /// assert_eq!(Cell::from_code(4), Cell::Filled(Color::Invalid));
    /// ```
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Cell::Empty,
            1 => Cell::Filled(Color::Red),
            2 => Cell::Filled(Color::Green),
            3 => Cell::Filled(Color::Blue),
            _ => Cell::Filled(Color::Invalid),
        }
    }

    /// Encode to a wire code
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(Color::Red) => 1,
            Cell::Filled(Color::Green) => 2,
            Cell::Filled(Color::Blue) => 3,
            Cell::Filled(Color::Invalid) => Self::INVALID_CODE,
        }
    }
}

/// Directions a piece can be shifted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// (row, col) step for this direction
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
    Rotate,
    NewGame,
    DebugLayout,
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive, for scripted input)
    ///
    /// ```
    /// use mintris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "newgame" => Some(GameAction::NewGame),
            "debuglayout" => Some(GameAction::DebugLayout),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::NewGame => "newGame",
            GameAction::DebugLayout => "debugLayout",
            GameAction::Quit => "quit",
        }
    }

    /// Shift direction for the single-step move actions
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}
