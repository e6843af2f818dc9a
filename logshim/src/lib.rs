//! logshim - one complete logger out of partial ones.
//!
//! Libraries often accept "a logger" but differ in what they expect from it:
//! a plain `print`, leveled `debug`/`info`/`error`, or leveled calls that
//! also carry a request scope. This crate adapts whatever a caller has into
//! a logger that supports all of them.
//!
//! ```
//! use std::sync::Arc;
//! use logshim::log::{adapt, adapt_std_logger, NoOpLogger, StdLogger};
//!
//! // Complete loggers pass through untouched.
//! let logger = adapt(Arc::new(NoOpLogger));
//!
//! // A missing logger becomes a silent one.
//! let silent = adapt_std_logger(None::<Arc<dyn StdLogger>>);
//! ```
//!
//! The [`logging`] module installs the `tracing` subscriber that
//! [`log::TracingLogger`] writes to.

pub mod config;
pub mod log;
pub mod logging;

/// Version of the logshim library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
