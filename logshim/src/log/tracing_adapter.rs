//! Tracing library adapter implementation.

use std::fmt::{Arguments, Display};
use std::sync::Arc;

use crate::log::{
    CompleteLogger, Scope, Severity, SeverityCtxLogger, SeverityLogger, StdLogger, Values,
};

/// Complete logger that delegates to the `tracing` crate.
///
/// Plain `print`/`printf` calls are emitted at INFO. The scope-aware calls
/// attach the scope's `request_id` (or `-`) and `cancelled` state as event
/// fields.
///
/// # Example
///
/// ```ignore
/// use logshim::log::{adapt, SeverityLogger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes tracing subscriber is already initialized
/// let logger = adapt(Arc::new(TracingLogger));
/// logger.infof(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }

    fn emit(severity: Severity, message: &dyn Display) {
        match severity {
            Severity::Debug => tracing::debug!("{}", message),
            Severity::Info => tracing::info!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }

    fn emit_scoped(severity: Severity, scope: &Scope, message: &dyn Display) {
        let request_id = scope.request_id().unwrap_or("-");
        let cancelled = scope.is_cancelled();
        match severity {
            Severity::Debug => tracing::debug!(request_id, cancelled, "{}", message),
            Severity::Info => tracing::info!(request_id, cancelled, "{}", message),
            Severity::Error => tracing::error!(request_id, cancelled, "{}", message),
        }
    }
}

impl StdLogger for TracingLogger {
    fn print(&self, values: &[&dyn Display]) {
        Self::emit(Severity::Info, &Values::new(values));
    }

    fn printf(&self, args: Arguments<'_>) {
        Self::emit(Severity::Info, &args);
    }

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

impl SeverityLogger for TracingLogger {
    fn debug(&self, values: &[&dyn Display]) {
        Self::emit(Severity::Debug, &Values::new(values));
    }

    fn debugf(&self, args: Arguments<'_>) {
        Self::emit(Severity::Debug, &args);
    }

    fn error(&self, values: &[&dyn Display]) {
        Self::emit(Severity::Error, &Values::new(values));
    }

    fn errorf(&self, args: Arguments<'_>) {
        Self::emit(Severity::Error, &args);
    }

    fn info(&self, values: &[&dyn Display]) {
        Self::emit(Severity::Info, &Values::new(values));
    }

    fn infof(&self, args: Arguments<'_>) {
        Self::emit(Severity::Info, &args);
    }
}

impl SeverityCtxLogger for TracingLogger {
    fn debug_c(&self, scope: &Scope, values: &[&dyn Display]) {
        Self::emit_scoped(Severity::Debug, scope, &Values::new(values));
    }

    fn debug_cf(&self, scope: &Scope, args: Arguments<'_>) {
        Self::emit_scoped(Severity::Debug, scope, &args);
    }

    fn error_c(&self, scope: &Scope, values: &[&dyn Display]) {
        Self::emit_scoped(Severity::Error, scope, &Values::new(values));
    }

    fn error_cf(&self, scope: &Scope, args: Arguments<'_>) {
        Self::emit_scoped(Severity::Error, scope, &args);
    }

    fn info_c(&self, scope: &Scope, values: &[&dyn Display]) {
        Self::emit_scoped(Severity::Info, scope, &Values::new(values));
    }

    fn info_cf(&self, scope: &Scope, args: Arguments<'_>) {
        Self::emit_scoped(Severity::Info, scope, &args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::adapt;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run `f` with a debug-level subscriber writing into a buffer.
    fn capture<F: FnOnce()>(f: F) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_is_complete() {
        let logger = Arc::new(TracingLogger::new());
        let adapted = adapt(logger.clone());
        assert!(std::ptr::eq(
            Arc::as_ptr(&logger) as *const (),
            Arc::as_ptr(&adapted) as *const ()
        ));
    }

    #[test]
    fn test_print_emits_info() {
        let output = capture(|| {
            TracingLogger.print(&[&"tile", &42]);
        });
        assert!(output.contains("INFO"), "output: {output}");
        assert!(output.contains("tile 42"), "output: {output}");
    }

    #[test]
    fn test_levels_are_preserved() {
        let output = capture(|| {
            TracingLogger.debugf(format_args!("debug {}", 1));
            TracingLogger.error(&[&"broken", &"pipe"]);
        });
        assert!(output.contains("DEBUG"), "output: {output}");
        assert!(output.contains("debug 1"), "output: {output}");
        assert!(output.contains("ERROR"), "output: {output}");
        assert!(output.contains("broken pipe"), "output: {output}");
    }

    #[test]
    fn test_scoped_calls_attach_scope_fields() {
        let scope = Scope::background().with_request_id("req-9");
        scope.cancel();
        let output = capture(|| {
            TracingLogger.info_cf(&scope, format_args!("handled {}", "request"));
        });
        assert!(output.contains("handled request"), "output: {output}");
        assert!(output.contains("req-9"), "output: {output}");
        assert!(output.contains("cancelled=true"), "output: {output}");
    }

    #[test]
    fn test_background_scope_has_placeholder_request_id() {
        let output = capture(|| {
            TracingLogger.error_c(&Scope::background(), &[&"failed"]);
        });
        assert!(output.contains("failed"), "output: {output}");
        assert!(output.contains("cancelled=false"), "output: {output}");
    }

    #[test]
    fn test_tracing_logger_debug_impl() {
        let logger = TracingLogger;
        let debug_str = format!("{:?}", logger);
        assert_eq!(debug_str, "TracingLogger");
    }
}
