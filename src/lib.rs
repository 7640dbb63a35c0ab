//! Mintris (workspace facade crate).
//!
//! Re-exports the workspace crates as `mintris::{core,input,term,types}` and
//! holds the process-level pieces shared by the binary and its tests:
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use mintris_core as core;
pub use mintris_input as input;
pub use mintris_term as term;
pub use mintris_types as types;

pub use config::Config;
