//! Logging bootstrap for the `kruskal` binary.
//!
//! Installs a global `tracing` subscriber writing to `stderr` and bridges the
//! `log` facade. `KRUSKAL_LOG_FORMAT` selects `human` (default) or `json`
//! output; `RUST_LOG` controls the level and defaults to `info`.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::warn;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "KRUSKAL_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `KRUSKAL_LOG_FORMAT` was not valid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user.
        provided: String,
    },
}

/// Installs structured logging once per process.
///
/// Later calls return the format chosen by the first call. If another
/// subscriber already owns the global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when `KRUSKAL_LOG_FORMAT` is unreadable or names
/// an unsupported format.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }
    let format = format_from_env()?;
    install(format);
    Ok(*INSTALLED.get_or_init(|| format))
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best effort: an existing `log` logger keeps its slot.
    let _ = LogTracer::init();

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        warn!(error = %err, "tracing subscriber already installed");
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
