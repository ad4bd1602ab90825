//! Entry point for the `kruskal` binary.
//!
//! Parses arguments, computes the requested forest, prints it to stdout, and
//! maps failures to a non-zero exit code after logging them with a stable
//! error code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use kruskal_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let mut writer = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut writer).context("failed to render forest")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().map(CliError::code);
            let message = format!("{err:#}");
            error!(
                error = %message,
                code = code.map(field::display),
                "command execution failed"
            );
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
