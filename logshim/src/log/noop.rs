//! No-operation logger implementation.

use std::fmt::{Arguments, Display};
use std::sync::Arc;

use crate::log::{CompleteLogger, Scope, SeverityCtxLogger, SeverityLogger, StdLogger};

/// A complete logger that discards all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Components that take a logger but run silently
///
/// Since it is already complete, adapting it hands back the same instance.
///
/// # Example
///
/// ```
/// use logshim::log::{adapt, NoOpLogger, SeverityLogger};
/// use std::sync::Arc;
///
/// let logger = adapt(Arc::new(NoOpLogger));
/// logger.info(&[&"This message is discarded"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl StdLogger for NoOpLogger {
    #[inline]
    fn print(&self, _values: &[&dyn Display]) {}

    #[inline]
    fn printf(&self, _args: Arguments<'_>) {}

    fn as_severity(self: Arc<Self>) -> Option<Arc<dyn SeverityLogger>> {
        Some(self)
    }

    fn as_severity_ctx(self: Arc<Self>) -> Option<Arc<dyn SeverityCtxLogger>> {
        Some(self)
    }

    fn as_complete(self: Arc<Self>) -> Option<Arc<dyn CompleteLogger>> {
        Some(self)
    }
}

impl SeverityLogger for NoOpLogger {
    #[inline]
    fn debug(&self, _values: &[&dyn Display]) {}
    #[inline]
    fn debugf(&self, _args: Arguments<'_>) {}
    #[inline]
    fn error(&self, _values: &[&dyn Display]) {}
    #[inline]
    fn errorf(&self, _args: Arguments<'_>) {}
    #[inline]
    fn info(&self, _values: &[&dyn Display]) {}
    #[inline]
    fn infof(&self, _args: Arguments<'_>) {}
}

impl SeverityCtxLogger for NoOpLogger {
    #[inline]
    fn debug_c(&self, _scope: &Scope, _values: &[&dyn Display]) {}
    #[inline]
    fn debug_cf(&self, _scope: &Scope, _args: Arguments<'_>) {}
    #[inline]
    fn error_c(&self, _scope: &Scope, _values: &[&dyn Display]) {}
    #[inline]
    fn error_cf(&self, _scope: &Scope, _args: Arguments<'_>) {}
    #[inline]
    fn info_c(&self, _scope: &Scope, _values: &[&dyn Display]) {}
    #[inline]
    fn info_cf(&self, _scope: &Scope, _args: Arguments<'_>) {}
}
