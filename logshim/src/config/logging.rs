//! Logging subscriber configuration.

use std::path::{Path, PathBuf};

use crate::log::Severity;

/// Default directory for the optional log file.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "logshim.log";

/// Default severity when neither `RUST_LOG` nor an explicit filter is set.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// Configuration for [`init_logging`](crate::logging::init_logging).
///
/// Console output is always on. File output is enabled by setting a log
/// directory.
///
/// # Example
///
/// ```
/// use logshim::config::LoggingConfig;
/// use logshim::log::Severity;
///
/// // Using defaults
/// let config = LoggingConfig::default();
/// assert_eq!(config.filter_directive(), "info");
/// assert!(config.log_path().is_none());
///
/// // Custom configuration
/// let config = LoggingConfig::new()
///     .with_level(Severity::Debug)
///     .with_log_dir("logs")
///     .with_ansi(false);
/// assert_eq!(config.filter_directive(), "debug");
/// assert_eq!(config.log_path().unwrap().to_str(), Some("logs/logshim.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level used when no explicit filter is given
    level: Severity,
    /// Full `EnvFilter` directive, overrides `level`
    filter: Option<String>,
    /// Directory for the log file; `None` disables file output
    log_dir: Option<PathBuf>,
    /// Log file name inside `log_dir`
    log_file: String,
    /// ANSI colors on the console
    ansi: bool,
}

impl LoggingConfig {
    /// Create a new logging configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default severity. Default: info.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Set a full filter directive such as `"info,logshim=debug"`.
    ///
    /// Takes precedence over [`with_level`](Self::with_level). `RUST_LOG`
    /// still wins over both.
    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }

    /// Write a log file into `dir` in addition to the console.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Set the log file name. Default: `logshim.log`.
    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log_file = file.into();
        self
    }

    /// Enable or disable ANSI colors on the console. Default: enabled.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Disable file output.
    pub fn without_file(mut self) -> Self {
        self.log_dir = None;
        self
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn ansi(&self) -> bool {
        self.ansi
    }

    /// The filter directive to install: the explicit filter, or the level.
    pub fn filter_directive(&self) -> String {
        self.filter
            .clone()
            .unwrap_or_else(|| self.level.as_str().to_string())
    }

    /// Full path of the log file, if file output is enabled.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(&self.log_file))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            filter: None,
            log_dir: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            ansi: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level(), Severity::Info);
        assert_eq!(config.filter(), None);
        assert_eq!(config.log_dir(), None);
        assert_eq!(config.log_file(), DEFAULT_LOG_FILE);
        assert!(config.ansi());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(LoggingConfig::new(), LoggingConfig::default());
    }

    #[test]
    fn test_filter_overrides_level() {
        let config = LoggingConfig::new()
            .with_level(Severity::Error)
            .with_filter("info,logshim=debug");
        assert_eq!(config.filter_directive(), "info,logshim=debug");
    }

    #[test]
    fn test_level_directive() {
        let config = LoggingConfig::new().with_level(Severity::Error);
        assert_eq!(config.filter_directive(), "error");
    }

    #[test]
    fn test_log_path() {
        let config = LoggingConfig::new()
            .with_log_dir(DEFAULT_LOG_DIR)
            .with_log_file("app.log");
        assert_eq!(config.log_path(), Some(PathBuf::from("logs/app.log")));
    }

    #[test]
    fn test_without_file() {
        let config = LoggingConfig::new().with_log_dir("logs").without_file();
        assert_eq!(config.log_path(), None);
    }
}
