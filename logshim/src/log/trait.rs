//! Logger capability traits.
//!
//! A logger may implement any subset of the leveled capabilities, but every
//! logger implements [`StdLogger`]. The optional capabilities are advertised
//! through the `as_*` probe methods so they can be discovered at runtime from
//! an `Arc<dyn StdLogger>` without the concrete type.

use std::fmt::{self, Arguments, Display};
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::log::Scope;

/// Severity of a leveled log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Error messages
    Error,
}

impl Severity {
    /// Lowercase name, as accepted by [`FromStr`] and filter directives.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }

    /// The matching `tracing` level.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a severity name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid severity '{input}' - expected one of 'debug', 'info' or 'error'")]
pub struct ParseSeverityError {
    input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}

/// The minimal logging capability: plain and formatted printing.
///
/// This is the only trait a logger must implement to be adapted into a
/// [`CompleteLogger`]. Loggers that also implement [`SeverityLogger`] or
/// [`SeverityCtxLogger`] advertise it by overriding the matching probe:
///
/// ```
/// use std::fmt::{Arguments, Display};
/// use std::sync::Arc;
/// use logshim::log::{SeverityLogger, StdLogger, Values};
///
/// struct Stderr;
///
/// impl StdLogger for Stderr {
///     fn print(&self, values: &[&dyn Display]) {
///         eprintln!("{}", Values::new(values));
///     }
///     fn printf(&self, args: Arguments<'_>) {
///         eprintln!("{}", args);
///     }
///     fn as_severity(self: Arc<Self>) -> Option<Arc<dyn SeverityLogger>> {
///         Some(self)
///     }
/// }
///
/// impl SeverityLogger for Stderr {
///     fn debug(&self, values: &[&dyn Display]) { self.print(values) }
///     fn debugf(&self, args: Arguments<'_>) { self.printf(args) }
///     fn error(&self, values: &[&dyn Display]) { self.print(values) }
///     fn errorf(&self, args: Arguments<'_>) { self.printf(args) }
///     fn info(&self, values: &[&dyn Display]) { self.print(values) }
///     fn infof(&self, args: Arguments<'_>) { self.printf(args) }
/// }
/// ```
pub trait StdLogger: Send + Sync {
    /// Print zero or more values.
    fn print(&self, values: &[&dyn Display]);

    /// Print a formatted message.
    fn printf(&self, args: Arguments<'_>);

    /// Probe for the severity capability.
    fn as_severity(self: Arc<Self>) -> Option<Arc<dyn SeverityLogger>> {
        None
    }

    /// Probe for the severity-with-scope capability.
    fn as_severity_ctx(self: Arc<Self>) -> Option<Arc<dyn SeverityCtxLogger>> {
        None
    }

    /// Probe for the complete capability set.
    ///
    /// Loggers returning `Some` here are handed back unchanged by
    /// [`adapt`](crate::log::adapt).
    fn as_complete(self: Arc<Self>) -> Option<Arc<dyn CompleteLogger>> {
        None
    }
}

/// Leveled logging without a scope token.
pub trait SeverityLogger: Send + Sync {
    fn debug(&self, values: &[&dyn Display]);
    fn debugf(&self, args: Arguments<'_>);
    fn error(&self, values: &[&dyn Display]);
    fn errorf(&self, args: Arguments<'_>);
    fn info(&self, values: &[&dyn Display]);
    fn infof(&self, args: Arguments<'_>);
}

/// Leveled logging carrying a [`Scope`] as first argument.
pub trait SeverityCtxLogger: Send + Sync {
    fn debug_c(&self, scope: &Scope, values: &[&dyn Display]);
    fn debug_cf(&self, scope: &Scope, args: Arguments<'_>);
    fn error_c(&self, scope: &Scope, values: &[&dyn Display]);
    fn error_cf(&self, scope: &Scope, args: Arguments<'_>);
    fn info_c(&self, scope: &Scope, values: &[&dyn Display]);
    fn info_cf(&self, scope: &Scope, args: Arguments<'_>);
}

/// The full 14-operation capability set.
///
/// Implemented automatically for anything implementing the three capability
/// traits.
pub trait CompleteLogger: StdLogger + SeverityLogger + SeverityCtxLogger {}

impl<T> CompleteLogger for T where T: StdLogger + SeverityLogger + SeverityCtxLogger + ?Sized {}

/// Print plain values: `log_print!(logger, "a", 1, value)`.
#[macro_export]
macro_rules! log_print {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.print(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Print a formatted message: `log_printf!(logger, "x = {}", x)`.
#[macro_export]
macro_rules! log_printf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.printf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(format_args!($($arg)*))
    };
}

/// Scope-aware plain values: `log_debug_c!(logger, &scope, "a", 1)`.
#[macro_export]
macro_rules! log_debug_c {
    ($logger:expr, $scope:expr $(, $value:expr)* $(,)?) => {
        $logger.debug_c($scope, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Scope-aware formatted message: `log_debug_cf!(logger, &scope, "x = {}", x)`.
#[macro_export]
macro_rules! log_debug_cf {
    ($logger:expr, $scope:expr, $($arg:tt)*) => {
        $logger.debug_cf($scope, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info_c {
    ($logger:expr, $scope:expr $(, $value:expr)* $(,)?) => {
        $logger.info_c($scope, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_info_cf {
    ($logger:expr, $scope:expr, $($arg:tt)*) => {
        $logger.info_cf($scope, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error_c {
    ($logger:expr, $scope:expr $(, $value:expr)* $(,)?) => {
        $logger.error_c($scope, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_error_cf {
    ($logger:expr, $scope:expr, $($arg:tt)*) => {
        $logger.error_cf($scope, format_args!($($arg)*))
    };
}
