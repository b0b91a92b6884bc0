//! Command implementations for fieldcheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod explain;

#[cfg(test)]
mod tests;

use crate::cli::Command;
use fieldcheck::error::Result;

pub use check::cmd_check;
pub use explain::cmd_explain;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Explain(args) => cmd_explain(args),
    }
}
