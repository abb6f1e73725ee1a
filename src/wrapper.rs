//! Uniform extended API over loggers of any capability tier.

use crate::format::Value;
use crate::interfaces::*;
use crate::{capabilities, Error, Level};
use std::fmt;
use std::sync::Arc;

/// The capability tiers, ordered by richness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// [`StdLogger`]: no levels at all.
    Std,
    /// [`LeveledLogger`]
    Leveled,
    /// [`ShortLeveledLogger`]
    ShortLeveled,
    /// [`ExtendedLeveledLogger`]
    Extended,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Std => "std",
            Tier::Leveled => "leveled",
            Tier::ShortLeveled => "short leveled",
            Tier::Extended => "extended",
        })
    }
}

#[derive(Clone)]
enum Pinned {
    Std(Arc<dyn StdLogger>),
    Leveled(Arc<dyn LeveledLogger>),
    ShortLeveled(Arc<dyn ShortLeveledLogger>),
    Extended(Arc<dyn ExtendedLeveledLogger>),
}

/// Wraps a third-party logger implementing any of the following interfaces:
///  * [`ExtendedLeveledLogger`]
///  * [`ShortLeveledLogger`]
///  * [`LeveledLogger`]
///  * [`StdLogger`]
///
/// and exposes the whole [`ExtendedLeveledLogger`] API on top of it.
///
/// Each call goes to the closest method the wrapped logger has. A [`StdLogger`] has
/// no levels, so leveled calls reach its `print` family with the level name in front
/// of the message (`"WARNING: "` as an extra first argument, or spliced into the
/// format). Leveled loggers without line variants get `infoln` as `info` and so on.
///
/// The wrapper never filters, exits or panics by itself: `fatal*` and `panic*` are
/// forwarded and whatever the wrapped logger does, happens.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use unilogger::*;
///
/// let buffer = MemoryBuffer::new();
/// let logger = BasicLogger::new(Sink::writer(buffer.clone())).with_counter(SequenceCounter::new());
/// let wrapper = LoggerWrapper::new(Arc::new(logger)).unwrap();
///
/// assert_eq!(wrapper.tier(), Tier::Extended);
/// wrapper.errorf("%d retries left", &args![0]);
/// assert_eq!(buffer.contents(), "ERROR|0001: 0 retries left\n");
/// ```
#[derive(Clone)]
pub struct LoggerWrapper {
    logger: Pinned,
}

impl LoggerWrapper {
    /// Wraps `logger`, pinning the richest tier it supports.
    ///
    /// Tiers are probed from richest to poorest: extended, short leveled, leveled,
    /// then std. Fails when none is supported.
    pub fn new(logger: Arc<dyn Capabilities>) -> Result<LoggerWrapper, Error> {
        let pinned = if let Some(l) = Arc::clone(&logger).extended() {
            Pinned::Extended(l)
        } else if let Some(l) = Arc::clone(&logger).short_leveled() {
            Pinned::ShortLeveled(l)
        } else if let Some(l) = Arc::clone(&logger).leveled() {
            Pinned::Leveled(l)
        } else if let Some(l) = logger.std_logger() {
            Pinned::Std(l)
        } else {
            log::warn!(target: "unilogger", "refusing to wrap a logger with no known interface");
            return Err(Error::Unrecognized);
        };

        let wrapper = LoggerWrapper { logger: pinned };
        log::debug!(target: "unilogger", "wrapped logger pinned at the {} tier", wrapper.tier());
        Ok(wrapper)
    }

    /// Like [`LoggerWrapper::new`], but panics when `logger` has no known interface.
    pub fn must(logger: Arc<dyn Capabilities>) -> LoggerWrapper {
        match LoggerWrapper::new(logger) {
            Ok(wrapper) => wrapper,
            Err(err) => panic!("{}", err),
        }
    }

    /// Takes ownership of `logger` and wraps it.
    pub fn wrap<L: Capabilities + 'static>(logger: L) -> Result<LoggerWrapper, Error> {
        LoggerWrapper::new(Arc::new(logger))
    }

    pub fn tier(&self) -> Tier {
        match self.logger {
            Pinned::Std(_) => Tier::Std,
            Pinned::Leveled(_) => Tier::Leveled,
            Pinned::ShortLeveled(_) => Tier::ShortLeveled,
            Pinned::Extended(_) => Tier::Extended,
        }
    }
}

impl fmt::Debug for LoggerWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerWrapper").field("tier", &self.tier()).finish()
    }
}

capabilities!(LoggerWrapper: extended);

/// Puts the level label in front of `args`, for loggers without levels.
fn leveled(level: Level, args: &[Value]) -> Vec<Value> {
    let mut leveled = Vec::with_capacity(args.len() + 1);
    leveled.push(Value::Str(format!("{}: ", level)));
    leveled.extend_from_slice(args);
    leveled
}

/// Puts the level label in front of `format`, for loggers without levels.
fn leveled_format(level: Level, format: &str) -> String {
    format!("{}: {}", level, format)
}

impl CriticalLogger for LoggerWrapper {
    #[track_caller]
    fn fatal(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.fatal(&leveled(Level::Critical, args)),
            Pinned::Leveled(l) => l.fatal(args),
            Pinned::ShortLeveled(l) => l.fatal(args),
            Pinned::Extended(l) => l.fatal(args),
        }
    }

    #[track_caller]
    fn fatalf(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.fatalf(&leveled_format(Level::Critical, format), args),
            Pinned::Leveled(l) => l.fatalf(format, args),
            Pinned::ShortLeveled(l) => l.fatalf(format, args),
            Pinned::Extended(l) => l.fatalf(format, args),
        }
    }

    #[track_caller]
    fn panic(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.panic(&leveled(Level::Critical, args)),
            Pinned::Leveled(l) => l.panic(args),
            Pinned::ShortLeveled(l) => l.panic(args),
            Pinned::Extended(l) => l.panic(args),
        }
    }

    #[track_caller]
    fn panicf(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.panicf(&leveled_format(Level::Critical, format), args),
            Pinned::Leveled(l) => l.panicf(format, args),
            Pinned::ShortLeveled(l) => l.panicf(format, args),
            Pinned::Extended(l) => l.panicf(format, args),
        }
    }
}

impl StdLogger for LoggerWrapper {
    /// Leveled loggers receive prints as `info`.
    #[track_caller]
    fn print(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(args),
            Pinned::Leveled(l) => l.info(args),
            Pinned::ShortLeveled(l) => l.info(args),
            Pinned::Extended(l) => l.print(args),
        }
    }

    #[track_caller]
    fn printf(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(format, args),
            Pinned::Leveled(l) => l.infof(format, args),
            Pinned::ShortLeveled(l) => l.infof(format, args),
            Pinned::Extended(l) => l.printf(format, args),
        }
    }

    #[track_caller]
    fn println(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(args),
            Pinned::Leveled(l) => l.info(args),
            Pinned::ShortLeveled(l) => l.info(args),
            Pinned::Extended(l) => l.println(args),
        }
    }

    #[track_caller]
    fn fatalln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.fatalln(&leveled(Level::Critical, args)),
            Pinned::Leveled(l) => l.fatal(args),
            Pinned::ShortLeveled(l) => l.fatal(args),
            Pinned::Extended(l) => l.fatalln(args),
        }
    }

    #[track_caller]
    fn panicln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.panicln(&leveled(Level::Critical, args)),
            Pinned::Leveled(l) => l.panic(args),
            Pinned::ShortLeveled(l) => l.panic(args),
            Pinned::Extended(l) => l.panicln(args),
        }
    }
}

impl LeveledLogger for LoggerWrapper {
    #[track_caller]
    fn debug(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(&leveled(Level::Debug, args)),
            Pinned::Leveled(l) => l.debug(args),
            Pinned::ShortLeveled(l) => l.debug(args),
            Pinned::Extended(l) => l.debug(args),
        }
    }

    #[track_caller]
    fn debugf(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(&leveled_format(Level::Debug, format), args),
            Pinned::Leveled(l) => l.debugf(format, args),
            Pinned::ShortLeveled(l) => l.debugf(format, args),
            Pinned::Extended(l) => l.debugf(format, args),
        }
    }

    #[track_caller]
    fn info(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(&leveled(Level::Info, args)),
            Pinned::Leveled(l) => l.info(args),
            Pinned::ShortLeveled(l) => l.info(args),
            Pinned::Extended(l) => l.info(args),
        }
    }

    #[track_caller]
    fn infof(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(&leveled_format(Level::Info, format), args),
            Pinned::Leveled(l) => l.infof(format, args),
            Pinned::ShortLeveled(l) => l.infof(format, args),
            Pinned::Extended(l) => l.infof(format, args),
        }
    }

    #[track_caller]
    fn warning(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(&leveled(Level::Warning, args)),
            Pinned::Leveled(l) => l.warning(args),
            Pinned::ShortLeveled(l) => l.warn(args),
            Pinned::Extended(l) => l.warning(args),
        }
    }

    #[track_caller]
    fn warningf(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(&leveled_format(Level::Warning, format), args),
            Pinned::Leveled(l) => l.warningf(format, args),
            Pinned::ShortLeveled(l) => l.warnf(format, args),
            Pinned::Extended(l) => l.warningf(format, args),
        }
    }

    #[track_caller]
    fn error(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(&leveled(Level::Error, args)),
            Pinned::Leveled(l) => l.error(args),
            Pinned::ShortLeveled(l) => l.error(args),
            Pinned::Extended(l) => l.error(args),
        }
    }

    #[track_caller]
    fn errorf(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(&leveled_format(Level::Error, format), args),
            Pinned::Leveled(l) => l.errorf(format, args),
            Pinned::ShortLeveled(l) => l.errorf(format, args),
            Pinned::Extended(l) => l.errorf(format, args),
        }
    }
}

// Only the extended tier knows the extra debug rungs; the others get plain `debug`.
impl DebugLeveledLogger for LoggerWrapper {
    #[track_caller]
    fn debug2(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(&leveled(Level::Debug2, args)),
            Pinned::Leveled(l) => l.debug(args),
            Pinned::ShortLeveled(l) => l.debug(args),
            Pinned::Extended(l) => l.debug2(args),
        }
    }

    #[track_caller]
    fn debug2f(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(&leveled_format(Level::Debug2, format), args),
            Pinned::Leveled(l) => l.debugf(format, args),
            Pinned::ShortLeveled(l) => l.debugf(format, args),
            Pinned::Extended(l) => l.debug2f(format, args),
        }
    }

    #[track_caller]
    fn debug3(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.print(&leveled(Level::Debug3, args)),
            Pinned::Leveled(l) => l.debug(args),
            Pinned::ShortLeveled(l) => l.debug(args),
            Pinned::Extended(l) => l.debug3(args),
        }
    }

    #[track_caller]
    fn debug3f(&self, format: &str, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.printf(&leveled_format(Level::Debug3, format), args),
            Pinned::Leveled(l) => l.debugf(format, args),
            Pinned::ShortLeveled(l) => l.debugf(format, args),
            Pinned::Extended(l) => l.debug3f(format, args),
        }
    }
}

impl ExtendedLeveledLogger for LoggerWrapper {
    #[track_caller]
    fn debug3ln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(&leveled(Level::Debug3, args)),
            Pinned::Leveled(l) => l.debug(args),
            Pinned::ShortLeveled(l) => l.debug(args),
            Pinned::Extended(l) => l.debug3ln(args),
        }
    }

    #[track_caller]
    fn debug2ln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(&leveled(Level::Debug2, args)),
            Pinned::Leveled(l) => l.debug(args),
            Pinned::ShortLeveled(l) => l.debug(args),
            Pinned::Extended(l) => l.debug2ln(args),
        }
    }

    #[track_caller]
    fn debugln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(&leveled(Level::Debug, args)),
            Pinned::Leveled(l) => l.debug(args),
            Pinned::ShortLeveled(l) => l.debug(args),
            Pinned::Extended(l) => l.debugln(args),
        }
    }

    #[track_caller]
    fn infoln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(&leveled(Level::Info, args)),
            Pinned::Leveled(l) => l.info(args),
            Pinned::ShortLeveled(l) => l.info(args),
            Pinned::Extended(l) => l.infoln(args),
        }
    }

    #[track_caller]
    fn warningln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(&leveled(Level::Warning, args)),
            Pinned::Leveled(l) => l.warning(args),
            Pinned::ShortLeveled(l) => l.warn(args),
            Pinned::Extended(l) => l.warningln(args),
        }
    }

    #[track_caller]
    fn errorln(&self, args: &[Value]) {
        match &self.logger {
            Pinned::Std(l) => l.println(&leveled(Level::Error, args)),
            Pinned::Leveled(l) => l.error(args),
            Pinned::ShortLeveled(l) => l.error(args),
            Pinned::Extended(l) => l.errorln(args),
        }
    }
}
