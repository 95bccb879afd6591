//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod repl;
pub mod script;
pub mod tui;

// Shared utilities for commands
pub(crate) mod util;
