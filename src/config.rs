//! Runtime configuration.
//!
//! Options come from the command line, each falling back to an environment
//! variable:
//!
//! | Flag | Environment | Meaning |
//! |------|-------------|---------|
//! | `--seed <N>` | `MINTRIS_SEED` | reproducible spawn sequence |
//! | `--log-path <PATH>` | `MINTRIS_LOG_PATH` | append logs to this file |
//! | `-v` (repeatable) | | log verbosity: warn, info, debug, trace |
//! | `--debug-layout` | | start from the debug fixture |

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

use crate::core::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "mintris", version, about = "Turn-based 2x2 falling-block puzzle")]
pub struct Config {
    /// Seed for a reproducible game (random when omitted)
    #[arg(long, env = "MINTRIS_SEED")]
    pub seed: Option<u64>,

    /// Append logs to this file. Nothing is logged without it.
    #[arg(long, env = "MINTRIS_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Start from the debug layout instead of an empty field
    #[arg(long)]
    pub debug_layout: bool,
}

impl Config {
    /// Build from environment variables only, with the same parsing and
    /// validation as the command line.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(["mintris"])
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// A fresh game per this configuration
    pub fn new_game(&self) -> GameState {
        let mut game = match self.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        if self.debug_layout {
            game.load_debug_layout();
        }
        game
    }
}
