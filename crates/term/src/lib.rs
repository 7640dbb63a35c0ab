//! Terminal rendering for the game.
//!
//! Rendering is split in two steps:
//! - [`GameView`] draws a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes framebuffers to the terminal through crossterm
//!
//! Each field cell is drawn 2 terminal columns wide to keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mintris_core as core;
pub use mintris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{block_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
