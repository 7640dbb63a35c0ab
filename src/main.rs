//! Terminal Mintris runner (default binary).
//!
//! The game is turn-based: the loop renders, blocks on the next terminal
//! event, applies the mapped action, and renders again. Nothing happens
//! between key presses.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

use mintris::core::{GameSnapshot, GameState};
use mintris::input::handle_key_event;
use mintris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use mintris::types::GameAction;
use mintris::{logging, Config};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let mut game = config.new_game();
    info!(seed = ?config.seed, debug_layout = config.debug_layout, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = game.score(), "exited");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => match handle_key_event(key) {
                Some(GameAction::Quit) => return Ok(()),
                Some(action) => {
                    game.apply_action(action);
                }
                None => {}
            },
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
