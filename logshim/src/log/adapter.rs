//! Capability adapter.
//!
//! Turns any [`StdLogger`] into a [`CompleteLogger`]. Missing capabilities
//! are synthesized from the ones that are present:
//!
//! | Input capabilities            | severity calls go to | scoped calls go to      |
//! |-------------------------------|----------------------|-------------------------|
//! | complete                      | input (unchanged)    | input (unchanged)       |
//! | none (`None` input)           | no-op                | no-op                   |
//! | std only                      | `print` / `printf`   | severity, scope dropped |
//! | std + severity                | input                | severity, scope dropped |
//! | std + severity-with-scope     | `print` / `printf`   | input                   |
//!
//! Every binding is resolved once, when the adapter is built. Calls on the
//! adapted logger go straight to the bound closure.

use std::fmt::{self, Arguments, Display};
use std::sync::Arc;

use crate::log::{CompleteLogger, Scope, SeverityCtxLogger, SeverityLogger, StdLogger};

type PrintFn = Arc<dyn Fn(&[&dyn Display]) + Send + Sync>;
type PrintfFn = Arc<dyn for<'a> Fn(Arguments<'a>) + Send + Sync>;
type ScopedPrintFn = Arc<dyn Fn(&Scope, &[&dyn Display]) + Send + Sync>;
type ScopedPrintfFn = Arc<dyn for<'a> Fn(&Scope, Arguments<'a>) + Send + Sync>;

// The helpers pin down closure signatures so the bindings are higher-ranked
// over the argument lifetimes.

fn print_fn<F>(f: F) -> PrintFn
where
    F: Fn(&[&dyn Display]) + Send + Sync + 'static,
{
    Arc::new(f)
}

fn printf_fn<F>(f: F) -> PrintfFn
where
    F: for<'a> Fn(Arguments<'a>) + Send + Sync + 'static,
{
    Arc::new(f)
}

fn scoped_print_fn<F>(f: F) -> ScopedPrintFn
where
    F: Fn(&Scope, &[&dyn Display]) + Send + Sync + 'static,
{
    Arc::new(f)
}

fn scoped_printf_fn<F>(f: F) -> ScopedPrintfFn
where
    F: for<'a> Fn(&Scope, Arguments<'a>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Optional capabilities detected on the adapted logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// The input implemented [`SeverityLogger`].
    pub severity: bool,
    /// The input implemented [`SeverityCtxLogger`].
    pub severity_ctx: bool,
}

impl Capabilities {
    /// Only the minimal capability, or no logger at all.
    pub const NONE: Capabilities = Capabilities {
        severity: false,
        severity_ctx: false,
    };

    /// Both optional capabilities.
    pub const ALL: Capabilities = Capabilities {
        severity: true,
        severity_ctx: true,
    };
}

/// Severity slots: bound to the input's own implementation or collapsed onto
/// the print bindings.
struct SeveritySlots {
    debug: PrintFn,
    debugf: PrintfFn,
    error: PrintFn,
    errorf: PrintfFn,
    info: PrintFn,
    infof: PrintfFn,
}

impl SeveritySlots {
    fn bind(logger: Arc<dyn SeverityLogger>) -> Self {
        let l = logger.clone();
        let debug = print_fn(move |values| l.debug(values));
        let l = logger.clone();
        let debugf = printf_fn(move |args| l.debugf(args));
        let l = logger.clone();
        let error = print_fn(move |values| l.error(values));
        let l = logger.clone();
        let errorf = printf_fn(move |args| l.errorf(args));
        let l = logger.clone();
        let info = print_fn(move |values| l.info(values));
        let l = logger;
        let infof = printf_fn(move |args| l.infof(args));
        Self {
            debug,
            debugf,
            error,
            errorf,
            info,
            infof,
        }
    }

    fn collapse(print: &PrintFn, printf: &PrintfFn) -> Self {
        Self {
            debug: print.clone(),
            debugf: printf.clone(),
            error: print.clone(),
            errorf: printf.clone(),
            info: print.clone(),
            infof: printf.clone(),
        }
    }
}

/// Scope-aware slots: bound to the input's own implementation or degraded to
/// the already resolved severity slots with the scope discarded.
struct ScopedSlots {
    debug_c: ScopedPrintFn,
    debug_cf: ScopedPrintfFn,
    error_c: ScopedPrintFn,
    error_cf: ScopedPrintfFn,
    info_c: ScopedPrintFn,
    info_cf: ScopedPrintfFn,
}

impl ScopedSlots {
    fn bind(logger: Arc<dyn SeverityCtxLogger>) -> Self {
        let l = logger.clone();
        let debug_c = scoped_print_fn(move |scope, values| l.debug_c(scope, values));
        let l = logger.clone();
        let debug_cf = scoped_printf_fn(move |scope, args| l.debug_cf(scope, args));
        let l = logger.clone();
        let error_c = scoped_print_fn(move |scope, values| l.error_c(scope, values));
        let l = logger.clone();
        let error_cf = scoped_printf_fn(move |scope, args| l.error_cf(scope, args));
        let l = logger.clone();
        let info_c = scoped_print_fn(move |scope, values| l.info_c(scope, values));
        let l = logger;
        let info_cf = scoped_printf_fn(move |scope, args| l.info_cf(scope, args));
        Self {
            debug_c,
            debug_cf,
            error_c,
            error_cf,
            info_c,
            info_cf,
        }
    }

    fn degrade(severity: &SeveritySlots) -> Self {
        Self {
            debug_c: drop_scope(&severity.debug),
            debug_cf: drop_scope_f(&severity.debugf),
            error_c: drop_scope(&severity.error),
            error_cf: drop_scope_f(&severity.errorf),
            info_c: drop_scope(&severity.info),
            info_cf: drop_scope_f(&severity.infof),
        }
    }
}

fn drop_scope(target: &PrintFn) -> ScopedPrintFn {
    let target = target.clone();
    scoped_print_fn(move |_scope, values| target(values))
}

fn drop_scope_f(target: &PrintfFn) -> ScopedPrintfFn {
    let target = target.clone();
    scoped_printf_fn(move |_scope, args| target(args))
}

/// A complete logger assembled from the capabilities of another logger.
///
/// Built by [`adapt`] / [`adapt_std_logger`], or directly with
/// [`AdaptedLogger::silent`]. All 14 operations are bound at construction and
/// never change afterwards.
pub struct AdaptedLogger {
    print: PrintFn,
    printf: PrintfFn,
    severity: SeveritySlots,
    scoped: ScopedSlots,
    capabilities: Capabilities,
    silent: bool,
}

impl AdaptedLogger {
    /// A logger whose every operation accepts its arguments and does nothing.
    pub fn silent() -> Self {
        let print = print_fn(|_values| {});
        let printf = printf_fn(|_args| {});
        let severity = SeveritySlots::collapse(&print, &printf);
        let scoped = ScopedSlots {
            debug_c: scoped_print_fn(|_scope, _values| {}),
            debug_cf: scoped_printf_fn(|_scope, _args| {}),
            error_c: scoped_print_fn(|_scope, _values| {}),
            error_cf: scoped_printf_fn(|_scope, _args| {}),
            info_c: scoped_print_fn(|_scope, _values| {}),
            info_cf: scoped_printf_fn(|_scope, _args| {}),
        };
        Self {
            print,
            printf,
            severity,
            scoped,
            capabilities: Capabilities::NONE,
            silent: true,
        }
    }

    /// Layered construction. Severity resolves before the scoped slots, which
    /// fall back onto the resolved severity slots rather than the raw input.
    fn layered<L>(logger: Arc<L>) -> Self
    where
        L: StdLogger + ?Sized + 'static,
    {
        let l = logger.clone();
        let print = print_fn(move |values| l.print(values));
        let l = logger.clone();
        let printf = printf_fn(move |args| l.printf(args));

        let mut capabilities = Capabilities::NONE;

        let severity = match logger.clone().as_severity() {
            Some(severity) => {
                capabilities.severity = true;
                SeveritySlots::bind(severity)
            }
            None => SeveritySlots::collapse(&print, &printf),
        };

        let scoped = match logger.as_severity_ctx() {
            Some(scoped) => {
                capabilities.severity_ctx = true;
                ScopedSlots::bind(scoped)
            }
            None => ScopedSlots::degrade(&severity),
        };

        Self {
            print,
            printf,
            severity,
            scoped,
            capabilities,
            silent: false,
        }
    }

    /// Capabilities the wrapped logger provided itself.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// True when built without an underlying logger.
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

impl Default for AdaptedLogger {
    fn default() -> Self {
        Self::silent()
    }
}

impl fmt::Debug for AdaptedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptedLogger")
            .field("capabilities", &self.capabilities)
            .field("silent", &self.silent)
            .finish_non_exhaustive()
    }
}

impl StdLogger for AdaptedLogger {
    fn print(&self, values: &[&dyn Display]) {
        (self.print)(values)
    }

    fn printf(&self, args: Arguments<'_>) {
        (self.printf)(args)
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

impl SeverityLogger for AdaptedLogger {
    fn debug(&self, values: &[&dyn Display]) {
        (self.severity.debug)(values)
    }

    fn debugf(&self, args: Arguments<'_>) {
        (self.severity.debugf)(args)
    }

    fn error(&self, values: &[&dyn Display]) {
        (self.severity.error)(values)
    }

    fn errorf(&self, args: Arguments<'_>) {
        (self.severity.errorf)(args)
    }

    fn info(&self, values: &[&dyn Display]) {
        (self.severity.info)(values)
    }

    fn infof(&self, args: Arguments<'_>) {
        (self.severity.infof)(args)
    }
}

impl SeverityCtxLogger for AdaptedLogger {
    fn debug_c(&self, scope: &Scope, values: &[&dyn Display]) {
        (self.scoped.debug_c)(scope, values)
    }

    fn debug_cf(&self, scope: &Scope, args: Arguments<'_>) {
        (self.scoped.debug_cf)(scope, args)
    }

    fn error_c(&self, scope: &Scope, values: &[&dyn Display]) {
        (self.scoped.error_c)(scope, values)
    }

    fn error_cf(&self, scope: &Scope, args: Arguments<'_>) {
        (self.scoped.error_cf)(scope, args)
    }

    fn info_c(&self, scope: &Scope, values: &[&dyn Display]) {
        (self.scoped.info_c)(scope, values)
    }

    fn info_cf(&self, scope: &Scope, args: Arguments<'_>) {
        (self.scoped.info_cf)(scope, args)
    }
}

/// Adapt an optional logger into a complete one.
///
/// - A logger that is already complete is returned as is.
/// - `None` yields a silent logger.
/// - Anything else is wrapped in an [`AdaptedLogger`].
///
/// This never fails and never calls into the wrapped logger.
///
/// ```
/// use std::sync::Arc;
/// use logshim::log::{adapt_std_logger, SeverityLogger, StdLogger};
///
/// let logger = adapt_std_logger(None::<Arc<dyn StdLogger>>);
/// logger.info(&[&"dropped"]);
/// ```
pub fn adapt_std_logger<L>(logger: Option<Arc<L>>) -> Arc<dyn CompleteLogger>
where
    L: StdLogger + ?Sized + 'static,
{
    let Some(logger) = logger else {
        return Arc::new(AdaptedLogger::silent());
    };
    if let Some(complete) = logger.clone().as_complete() {
        return complete;
    }
    Arc::new(AdaptedLogger::layered(logger))
}

/// Adapt a logger into a complete one. See [`adapt_std_logger`].
pub fn adapt<L>(logger: Arc<L>) -> Arc<dyn CompleteLogger>
where
    L: StdLogger + ?Sized + 'static,
{
    adapt_std_logger(Some(logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every call as `(operation, scope request id, rendered text)`.
    #[derive(Default)]
    struct Recorder {
        severity: bool,
        severity_ctx: bool,
        calls: Mutex<Vec<(&'static str, Option<String>, String)>>,
    }

    impl Recorder {
        fn with(severity: bool, severity_ctx: bool) -> Arc<Self> {
            Arc::new(Self {
                severity,
                severity_ctx,
                ..Default::default()
            })
        }

        fn record(&self, op: &'static str, scope: Option<&Scope>, text: String) {
            let id = scope.and_then(|s| s.request_id()).map(str::to_string);
            self.calls.lock().unwrap().push((op, id, text));
        }

        fn ops(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().iter().map(|c| c.0).collect()
        }
    }

    fn join(values: &[&dyn Display]) -> String {
        crate::log::Values::new(values).to_string()
    }

    impl StdLogger for Recorder {
        fn print(&self, values: &[&dyn Display]) {
            self.record("print", None, join(values));
        }
        fn printf(&self, args: Arguments<'_>) {
            self.record("printf", None, args.to_string());
        }
        fn as_severity(self: Arc<Self>) -> Option<Arc<dyn SeverityLogger>> {
            if self.severity {
                Some(self)
            } else {
                None
            }
        }
        fn as_severity_ctx(self: Arc<Self>) -> Option<Arc<dyn SeverityCtxLogger>> {
            if self.severity_ctx {
                Some(self)
            } else {
                None
            }
        }
    }

    impl SeverityLogger for Recorder {
        fn debug(&self, values: &[&dyn Display]) {
            self.record("debug", None, join(values));
        }
        fn debugf(&self, args: Arguments<'_>) {
            self.record("debugf", None, args.to_string());
        }
        fn error(&self, values: &[&dyn Display]) {
            self.record("error", None, join(values));
        }
        fn errorf(&self, args: Arguments<'_>) {
            self.record("errorf", None, args.to_string());
        }
        fn info(&self, values: &[&dyn Display]) {
            self.record("info", None, join(values));
        }
        fn infof(&self, args: Arguments<'_>) {
            self.record("infof", None, args.to_string());
        }
    }

    impl SeverityCtxLogger for Recorder {
        fn debug_c(&self, scope: &Scope, values: &[&dyn Display]) {
            self.record("debug_c", Some(scope), join(values));
        }
        fn debug_cf(&self, scope: &Scope, args: Arguments<'_>) {
            self.record("debug_cf", Some(scope), args.to_string());
        }
        fn error_c(&self, scope: &Scope, values: &[&dyn Display]) {
            self.record("error_c", Some(scope), join(values));
        }
        fn error_cf(&self, scope: &Scope, args: Arguments<'_>) {
            self.record("error_cf", Some(scope), args.to_string());
        }
        fn info_c(&self, scope: &Scope, values: &[&dyn Display]) {
            self.record("info_c", Some(scope), join(values));
        }
        fn info_cf(&self, scope: &Scope, args: Arguments<'_>) {
            self.record("info_cf", Some(scope), args.to_string());
        }
    }

    fn call_all(logger: &dyn CompleteLogger, scope: &Scope) {
        logger.print(&[&"p"]);
        logger.printf(format_args!("pf"));
        logger.debug(&[&"d"]);
        logger.debugf(format_args!("df"));
        logger.error(&[&"e"]);
        logger.errorf(format_args!("ef"));
        logger.info(&[&"i"]);
        logger.infof(format_args!("if"));
        logger.debug_c(scope, &[&"dc"]);
        logger.debug_cf(scope, format_args!("dcf"));
        logger.error_c(scope, &[&"ec"]);
        logger.error_cf(scope, format_args!("ecf"));
        logger.info_c(scope, &[&"ic"]);
        logger.info_cf(scope, format_args!("icf"));
    }

    #[test]
    fn test_std_only_routes_everything_to_print() {
        let recorder = Recorder::with(false, false);
        let logger = adapt(recorder.clone());
        call_all(logger.as_ref(), &Scope::background());

        assert_eq!(
            recorder.ops(),
            vec![
                "print", "printf", "print", "printf", "print", "printf", "print", "printf",
                "print", "printf", "print", "printf", "print", "printf",
            ]
        );
    }

    #[test]
    fn test_severity_input_binds_severity_and_degrades_scoped() {
        let recorder = Recorder::with(true, false);
        let logger = adapt(recorder.clone());
        call_all(logger.as_ref(), &Scope::background().with_request_id("r"));

        assert_eq!(
            recorder.ops(),
            vec![
                "print", "printf", "debug", "debugf", "error", "errorf", "info", "infof",
                "debug", "debugf", "error", "errorf", "info", "infof",
            ]
        );
        // Scope is discarded on the degraded path.
        assert!(recorder.calls.lock().unwrap().iter().all(|c| c.1.is_none()));
    }

    #[test]
    fn test_scoped_input_without_severity() {
        let recorder = Recorder::with(false, true);
        let logger = adapt(recorder.clone());
        call_all(logger.as_ref(), &Scope::background().with_request_id("r"));

        assert_eq!(
            recorder.ops(),
            vec![
                "print", "printf", "print", "printf", "print", "printf", "print", "printf",
                "debug_c", "debug_cf", "error_c", "error_cf", "info_c", "info_cf",
            ]
        );
    }

    #[test]
    fn test_full_input_forwards_each_operation() {
        let recorder = Recorder::with(true, true);
        let logger = adapt(recorder.clone());
        call_all(logger.as_ref(), &Scope::background().with_request_id("req-7"));

        let calls = recorder.calls.lock().unwrap().clone();
        let expected = [
            ("print", "p"),
            ("printf", "pf"),
            ("debug", "d"),
            ("debugf", "df"),
            ("error", "e"),
            ("errorf", "ef"),
            ("info", "i"),
            ("infof", "if"),
            ("debug_c", "dc"),
            ("debug_cf", "dcf"),
            ("error_c", "ec"),
            ("error_cf", "ecf"),
            ("info_c", "ic"),
            ("info_cf", "icf"),
        ];
        assert_eq!(calls.len(), expected.len());
        for (call, (op, text)) in calls.iter().zip(expected) {
            assert_eq!(call.0, op);
            assert_eq!(call.2, text);
            if op.ends_with("_c") || op.ends_with("_cf") {
                assert_eq!(call.1.as_deref(), Some("req-7"));
            }
        }
    }

    #[test]
    fn test_capabilities_reported() {
        let cases = [
            (false, false, Capabilities::NONE),
            (
                true,
                false,
                Capabilities {
                    severity: true,
                    severity_ctx: false,
                },
            ),
            (
                false,
                true,
                Capabilities {
                    severity: false,
                    severity_ctx: true,
                },
            ),
            (true, true, Capabilities::ALL),
        ];
        for (severity, severity_ctx, expected) in cases {
            let adapted = AdaptedLogger::layered(Recorder::with(severity, severity_ctx));
            assert_eq!(adapted.capabilities(), expected);
            assert!(!adapted.is_silent());
        }
    }

    #[test]
    fn test_adaptation_does_not_call_the_logger() {
        let recorder = Recorder::with(true, true);
        let _logger = adapt(recorder.clone());
        assert!(recorder.ops().is_empty());
    }

    #[test]
    fn test_silent_logger_accepts_everything() {
        let silent = AdaptedLogger::silent();
        assert!(silent.is_silent());
        assert_eq!(silent.capabilities(), Capabilities::NONE);
        let scope = Scope::background();
        scope.cancel();
        call_all(&silent, &scope);
    }

    #[test]
    fn test_none_adapts_to_silent_logger() {
        let logger = adapt_std_logger(None::<Arc<Recorder>>);
        call_all(logger.as_ref(), &Scope::background());
    }

    #[test]
    fn test_adapted_logger_is_complete() {
        let adapted = Arc::new(AdaptedLogger::silent());
        let again = adapt(adapted.clone());
        assert!(std::ptr::eq(
            Arc::as_ptr(&adapted) as *const (),
            Arc::as_ptr(&again) as *const ()
        ));
    }

    #[test]
    fn test_debug_output() {
        let adapted = AdaptedLogger::layered(Recorder::with(true, false));
        assert_eq!(
            format!("{:?}", adapted),
            "AdaptedLogger { capabilities: Capabilities { severity: true, severity_ctx: false }, silent: false, .. }"
        );
    }

    #[test]
    fn test_adapted_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdaptedLogger>();
    }
}
