//! Logging capability layer.
//!
//! Loggers come in different shapes: some can only print, some know about
//! severities, some also take a request [`Scope`]. This module defines one
//! trait per capability and an adapter that turns any of them into a
//! [`CompleteLogger`], so downstream code can always call every operation.
//!
//! # Architecture
//!
//! - [`StdLogger`]: minimal capability (`print`, `printf`), required
//! - [`SeverityLogger`]: `debug`/`info`/`error`, plain and formatted
//! - [`SeverityCtxLogger`]: the same six operations taking a [`Scope`]
//! - [`CompleteLogger`]: all of the above
//! - [`adapt`] / [`adapt_std_logger`]: fill in whatever is missing
//! - [`TracingLogger`]: complete logger backed by `tracing`
//! - [`NoOpLogger`]: complete logger that discards everything
//!
//! # Usage
//!
//! ```
//! use std::fmt::{Arguments, Display};
//! use std::sync::Arc;
//! use logshim::log::{adapt, Scope, SeverityCtxLogger, SeverityLogger, StdLogger, Values};
//! use logshim::{log_debug, log_info_cf};
//!
//! struct Console;
//!
//! impl StdLogger for Console {
//!     fn print(&self, values: &[&dyn Display]) {
//!         println!("{}", Values::new(values));
//!     }
//!     fn printf(&self, args: Arguments<'_>) {
//!         println!("{}", args);
//!     }
//! }
//!
//! let logger = adapt(Arc::new(Console));
//! let scope = Scope::background().with_request_id("req-1");
//!
//! // Both end up in Console::print / Console::printf.
//! log_debug!(logger, "cache", "warm");
//! log_info_cf!(logger, &scope, "served {} tiles", 12);
//! ```

mod adapter;
mod noop;
mod scope;
mod tracing_adapter;
mod r#trait;
mod values;

pub use adapter::{adapt, adapt_std_logger, AdaptedLogger, Capabilities};
pub use noop::NoOpLogger;
pub use r#trait::{
    CompleteLogger, ParseSeverityError, Severity, SeverityCtxLogger, SeverityLogger, StdLogger,
};
pub use scope::Scope;
pub use tracing_adapter::TracingLogger;
pub use values::Values;
