//! Module providing the BasicLogger implementation

use super::logging::{write_header, Location};
use super::sink::Sink;
use crate::format::{self, Value};
use crate::interfaces::*;
use crate::{capabilities, Config, Error, Level, Message, SequenceCounter};
use log::{set_boxed_logger, set_max_level, Log, Metadata, Record};
use std::io;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;
#[cfg(feature = "termcolor")]
use {super::sink::TerminalMode, termcolor::ColorChoice};

const OUTPUT_DEPTH: usize = 3;
const SUB_LOGGER_OUTPUT_DEPTH: usize = 4;

/// A simple leveled logger implementing every capability tier.
///
/// It uses 8 levels, from `Debug3` to `Critical` plus `Print`, and only writes
/// calls at or above its threshold (`Info` unless changed with
/// [`LevelSetter::set_level`]). Each written line takes the next id from the
/// logger's [`SequenceCounter`], shared with its sub-loggers and, unless
/// [`with_counter`](BasicLogger::with_counter) is used, with every other
/// `BasicLogger` in the process.
///
/// `fatal*` calls write a `CRITICAL` line and then run the configured exit handler
/// with status 1; `panic*` calls write a `CRITICAL` line and then panic with the
/// message text.
///
/// # Examples
///
/// ```
/// use unilogger::{args, BasicLogger, LeveledLogger, MemoryBuffer, SequenceCounter, Sink};
///
/// let buffer = MemoryBuffer::new();
/// let logger = BasicLogger::new(Sink::writer(buffer.clone())).with_counter(SequenceCounter::new());
///
/// logger.debug(&args!["x"]);
/// logger.info(&args!["a", "b"]);
/// assert_eq!(buffer.contents(), "INFO|0001: a b\n");
/// ```
#[derive(Debug)]
pub struct BasicLogger {
    sink: Sink,
    config: Arc<Config>,
    counter: SequenceCounter,
    level: AtomicU8,
    output_depth: AtomicUsize,
}

impl BasicLogger {
    /// Creates a logger writing bare `LEVEL|id: text` lines to `sink`.
    #[must_use]
    pub fn new(sink: Sink) -> BasicLogger {
        BasicLogger::with_config(sink, Config::default())
    }

    #[must_use]
    pub fn with_config(sink: Sink, config: Config) -> BasicLogger {
        BasicLogger {
            sink,
            config: Arc::new(config),
            counter: SequenceCounter::global(),
            level: AtomicU8::new(Level::Info as u8),
            output_depth: AtomicUsize::new(OUTPUT_DEPTH),
        }
    }

    /// Creates a logger writing to the standard streams.
    ///
    /// # Examples
    /// ```
    /// # use unilogger::*;
    /// let logger = BasicLogger::terminal(
    ///     Config::builder().set_format(Format::Std).build(),
    ///     TerminalMode::Mixed,
    ///     ColorChoice::Auto,
    /// );
    /// ```
    #[cfg(feature = "termcolor")]
    #[must_use]
    pub fn terminal(config: Config, mode: TerminalMode, color_choice: ColorChoice) -> BasicLogger {
        BasicLogger::with_config(Sink::terminal(mode, color_choice), config)
    }

    /// Draws ids from `counter` instead of the process-wide counter.
    #[must_use]
    pub fn with_counter(mut self, counter: SequenceCounter) -> BasicLogger {
        self.counter = counter;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn counter(&self) -> &SequenceCounter {
        &self.counter
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Globally installs the logger as the `log` crate backend.
    ///
    /// The `log` max level follows the current threshold. Fails if another logger
    /// was already installed.
    pub fn init(self) -> Result<(), Error> {
        set_max_level(self.level().into());
        set_boxed_logger(Box::new(self))?;
        Ok(())
    }

    /// Writes one line at `level`, unless the threshold filters it out.
    ///
    /// With a `format`, arguments are substituted printf-style; without one they
    /// are joined by spaces.
    #[track_caller]
    pub fn emit(&self, level: Level, format: Option<&str>, args: &[Value]) {
        let caller = std::panic::Location::caller();
        self.write(level, format, args, Some((caller.file(), caller.line())));
    }

    fn write(&self, level: Level, format: Option<&str>, args: &[Value], location: Location<'_>) {
        if !self.level().is_allowed(level) {
            return;
        }
        let message = Message::new(self.counter.next(), level, format, args);
        // Like `log::Log::log`, a failing sink is not the caller's problem.
        let _ = self.try_write(&message, location);
    }

    fn try_write(&self, message: &Message, location: Location<'_>) -> io::Result<()> {
        let header = write_header(&self.config, location)?;
        self.sink.write_line(&self.config, &header, message)
    }

    fn exit(&self) {
        (self.config.exit_handler)(1);
    }
}

capabilities!(BasicLogger: extended, leveled, std_logger);

impl SubLogger for BasicLogger {
    type Sub = BasicLogger;

    /// A logger one call frame deeper, sharing sink, config and counter.
    ///
    /// The threshold is copied: later changes on either side are not seen by the
    /// other.
    fn sub_logger(&self) -> BasicLogger {
        BasicLogger {
            sink: self.sink.clone(),
            config: Arc::clone(&self.config),
            counter: self.counter.clone(),
            level: AtomicU8::new(self.level() as u8),
            output_depth: AtomicUsize::new(SUB_LOGGER_OUTPUT_DEPTH),
        }
    }
}

impl LevelSetter for BasicLogger {
    #[track_caller]
    fn set_level(&self, level: Level) {
        self.emit(Level::Debug, Some("Setting log level to: '%s'"), &[Value::from(level.as_str())]);
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

impl LevelGetter for BasicLogger {
    fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }
}

impl OutputDepthSetter for BasicLogger {
    fn set_output_depth(&self, depth: usize) {
        self.output_depth.store(depth, Ordering::Relaxed);
    }
}

impl OutputDepthGetter for BasicLogger {
    fn output_depth(&self) -> usize {
        self.output_depth.load(Ordering::Relaxed)
    }
}

impl CriticalLogger for BasicLogger {
    #[track_caller]
    fn fatal(&self, args: &[Value]) {
        self.emit(Level::Critical, None, args);
        self.exit();
    }

    #[track_caller]
    fn fatalf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Critical, Some(format), args);
        self.exit();
    }

    #[track_caller]
    fn panic(&self, args: &[Value]) {
        self.emit(Level::Critical, None, args);
        panic!("{}", format::sprint(args));
    }

    #[track_caller]
    fn panicf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Critical, Some(format), args);
        panic!("{}", format::sprintf(format, args));
    }
}

impl StdLogger for BasicLogger {
    #[track_caller]
    fn print(&self, args: &[Value]) {
        self.emit(Level::Print, None, args);
    }

    #[track_caller]
    fn printf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Print, Some(format), args);
    }

    #[track_caller]
    fn println(&self, args: &[Value]) {
        self.emit(Level::Print, None, args);
    }

    #[track_caller]
    fn fatalln(&self, args: &[Value]) {
        self.fatal(args);
    }

    #[track_caller]
    fn panicln(&self, args: &[Value]) {
        self.panic(args);
    }
}

impl LeveledLogger for BasicLogger {
    #[track_caller]
    fn debug(&self, args: &[Value]) {
        self.emit(Level::Debug, None, args);
    }

    #[track_caller]
    fn debugf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Debug, Some(format), args);
    }

    #[track_caller]
    fn info(&self, args: &[Value]) {
        self.emit(Level::Info, None, args);
    }

    #[track_caller]
    fn infof(&self, format: &str, args: &[Value]) {
        self.emit(Level::Info, Some(format), args);
    }

    #[track_caller]
    fn warning(&self, args: &[Value]) {
        self.emit(Level::Warning, None, args);
    }

    #[track_caller]
    fn warningf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Warning, Some(format), args);
    }

    #[track_caller]
    fn error(&self, args: &[Value]) {
        self.emit(Level::Error, None, args);
    }

    #[track_caller]
    fn errorf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Error, Some(format), args);
    }
}

impl DebugLeveledLogger for BasicLogger {
    #[track_caller]
    fn debug2(&self, args: &[Value]) {
        self.emit(Level::Debug2, None, args);
    }

    #[track_caller]
    fn debug2f(&self, format: &str, args: &[Value]) {
        self.emit(Level::Debug2, Some(format), args);
    }

    #[track_caller]
    fn debug3(&self, args: &[Value]) {
        self.emit(Level::Debug3, None, args);
    }

    #[track_caller]
    fn debug3f(&self, format: &str, args: &[Value]) {
        self.emit(Level::Debug3, Some(format), args);
    }
}

// Every line already ends with a newline, so the `ln` shapes match the bare ones.
impl ExtendedLeveledLogger for BasicLogger {
    #[track_caller]
    fn debug3ln(&self, args: &[Value]) {
        self.emit(Level::Debug3, None, args);
    }

    #[track_caller]
    fn debug2ln(&self, args: &[Value]) {
        self.emit(Level::Debug2, None, args);
    }

    #[track_caller]
    fn debugln(&self, args: &[Value]) {
        self.emit(Level::Debug, None, args);
    }

    #[track_caller]
    fn infoln(&self, args: &[Value]) {
        self.emit(Level::Info, None, args);
    }

    #[track_caller]
    fn warningln(&self, args: &[Value]) {
        self.emit(Level::Warning, None, args);
    }

    #[track_caller]
    fn errorln(&self, args: &[Value]) {
        self.emit(Level::Error, None, args);
    }
}

impl Log for BasicLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.level().is_allowed(metadata.level().into())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let location = record.file().zip(record.line());
            self.write(record.level().into(), None, &[Value::from(*record.args())], location);
        }
    }

    fn flush(&self) {
        let _ = self.sink.flush();
    }
}
