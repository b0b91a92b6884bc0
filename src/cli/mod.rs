//! CLI argument parsing for fieldcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Fieldcheck: validate JSON/YAML records against per-field rule strings.
///
/// A schema file declares the fields of a record in order, each with an
/// optional rule such as `len:4`, `min:3,max:20` or `in:admin,staff`.
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for fieldcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate record files against a schema.
    ///
    /// Prints one line per record and lists every violation. Exits with 2
    /// when any record is invalid and 3 on a configuration defect.
    Check(CheckArgs),

    /// Show how a rule string is parsed.
    ///
    /// Prints each check of the rule on its own line.
    Explain(ExplainArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Schema file (YAML or JSON) describing the record fields.
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Record files to validate (`.json`, otherwise parsed as YAML).
    #[arg(required = true)]
    pub records: Vec<PathBuf>,
}

/// Arguments for the `explain` command.
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Rule string, e.g. `min:3,max:20`.
    pub rule: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Log filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
