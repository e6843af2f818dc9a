//! Logging infrastructure.
//!
//! Installs a global `tracing` subscriber, which is what
//! [`TracingLogger`](crate::log::TracingLogger) writes to:
//! - Console output on stdout
//! - Optional log file (cleared on session start)
//! - Configurable via the RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors from [`init_logging`].
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be prepared, the configured
/// filter does not parse, or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let env_filter = env_filter(config)?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(config.ansi());

    let (file_layer, file_guard) = match config.log_dir() {
        Some(dir) => {
            prepare_log_file(dir, config.log_file())?;
            let file_appender = tracing_appender::rolling::never(dir, config.log_file());
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false); // No ANSI colors in file
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// `RUST_LOG` if set and valid, otherwise the configured directive.
fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    parse_filter(&config.filter_directive())
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        source,
    })
}

/// Create `dir` if needed and truncate the log file.
fn prepare_log_file(dir: &Path, file: &str) -> Result<PathBuf, LoggingError> {
    let path = dir.join(file);
    let io_err = |source| LoggingError::Io {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(dir).map_err(io_err)?;
    fs::write(&path, "").map_err(io_err)?;
    Ok(path)
}
