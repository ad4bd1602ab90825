//! Command-line interface for computing minimum spanning forests.
//!
//! The `run` command loads a text edge list, computes its minimum spanning
//! forest with the selected strategy, and optionally writes the result to a
//! file.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};
