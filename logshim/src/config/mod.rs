//! Configuration types.
//!
//! # Example
//!
//! ```
//! use logshim::config::LoggingConfig;
//! use logshim::log::Severity;
//!
//! let config = LoggingConfig::new()
//!     .with_level(Severity::Debug)
//!     .with_ansi(false);
//! ```

mod logging;

pub use logging::{LoggingConfig, DEFAULT_LEVEL, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
