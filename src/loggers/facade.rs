//! Logger implementation that delegates to the `log` crate.

use crate::config::{exit_process, ExitHandler};
use crate::format::{self, Value};
use crate::interfaces::{CriticalLogger, ShortLeveledLogger};
use crate::capabilities;
use log::{log, log_enabled, Level};

/// Bridges the short leveled interface to whatever `log` backend is installed.
///
/// Messages are only rendered when the backend accepts their level. `fatal*` logs
/// at error level, flushes the backend and runs the exit handler with status 1;
/// `panic*` logs at error level and panics with the message text.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use unilogger::{args, LogFacade, LoggerWrapper, Tier, ExtendedLeveledLogger};
///
/// let wrapper = LoggerWrapper::new(Arc::new(LogFacade::with_target("app"))).unwrap();
/// assert_eq!(wrapper.tier(), Tier::ShortLeveled);
/// wrapper.warningln(&args!["cache miss"]);
/// ```
#[derive(Debug, Clone)]
pub struct LogFacade {
    target: String,
    exit_handler: ExitHandler,
}

impl Default for LogFacade {
    fn default() -> Self {
        LogFacade::with_target(env!("CARGO_PKG_NAME"))
    }
}

impl LogFacade {
    pub fn new() -> LogFacade {
        LogFacade::default()
    }

    /// Logs under `target` instead of the crate name.
    pub fn with_target(target: impl Into<String>) -> LogFacade {
        LogFacade {
            target: target.into(),
            exit_handler: exit_process,
        }
    }

    /// Replaces what runs after a `fatal` record is logged (default exits the process).
    #[must_use]
    pub fn with_exit_handler(mut self, handler: ExitHandler) -> LogFacade {
        self.exit_handler = handler;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn emit(&self, level: Level, format: Option<&str>, args: &[Value]) {
        if log_enabled!(target: self.target.as_str(), level) {
            log!(target: self.target.as_str(), level, "{}", format::render(format, args));
        }
    }

    fn exit(&self) {
        log::logger().flush();
        (self.exit_handler)(1);
    }
}

capabilities!(LogFacade: short_leveled);

impl CriticalLogger for LogFacade {
    fn fatal(&self, args: &[Value]) {
        self.emit(Level::Error, None, args);
        self.exit();
    }

    fn fatalf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Error, Some(format), args);
        self.exit();
    }

    fn panic(&self, args: &[Value]) {
        self.emit(Level::Error, None, args);
        panic!("{}", format::sprint(args));
    }

    fn panicf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Error, Some(format), args);
        panic!("{}", format::sprintf(format, args));
    }
}

impl ShortLeveledLogger for LogFacade {
    fn debug(&self, args: &[Value]) {
        self.emit(Level::Debug, None, args);
    }

    fn debugf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Debug, Some(format), args);
    }

    fn info(&self, args: &[Value]) {
        self.emit(Level::Info, None, args);
    }

    fn infof(&self, format: &str, args: &[Value]) {
        self.emit(Level::Info, Some(format), args);
    }

    fn warn(&self, args: &[Value]) {
        self.emit(Level::Warn, None, args);
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Warn, Some(format), args);
    }

    fn error(&self, args: &[Value]) {
        self.emit(Level::Error, None, args);
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Error, Some(format), args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn log_facade_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogFacade>();
    }

    #[test]
    fn default_target_is_crate_name() {
        assert_eq!(LogFacade::new().target(), "unilogger");
        assert_eq!(LogFacade::with_target("svc").target(), "svc");
    }

    #[test]
    fn calls_without_backend_are_silent() {
        let facade = LogFacade::new();
        facade.debug(&args!["x"]);
        facade.infof("%d", &args![1]);
        facade.warn(&args!["y"]);
        facade.errorf("%s", &args!["z"]);
    }

    static EXIT_STATUS: AtomicI32 = AtomicI32::new(-1);

    fn record_exit(code: i32) {
        EXIT_STATUS.store(code, Ordering::SeqCst);
    }

    #[test]
    fn fatal_runs_exit_handler() {
        let facade = LogFacade::new().with_exit_handler(record_exit);
        facade.fatalf("gone: %s", &args!["disk"]);
        assert_eq!(EXIT_STATUS.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic(expected = "code 7")]
    fn panicf_panics_with_text() {
        LogFacade::new().panicf("code %d", &args![7]);
    }
}
