//! Leveled logging behind a handful of small interfaces, and an adapter that lifts
//! any logger implementing one of them to the richest one.
//!
//! * [`BasicLogger`] is the reference logger: numbered lines (`LEVEL|id: text`)
//!   filtered by a runtime threshold, written to a [`Sink`].
//! * [`LoggerWrapper`] accepts a logger of any [`Tier`] and exposes the full
//!   [`ExtendedLeveledLogger`] API, dispatching to the closest method available.
//! * [`LogFacade`] forwards to whatever backend the `log` crate has installed, and
//!   [`BasicLogger`] can itself be installed as that backend.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use unilogger::prelude::*;
//! use unilogger::{args, BasicLogger, Level, MemoryBuffer, SequenceCounter, Sink};
//!
//! let buffer = MemoryBuffer::new();
//! let logger = BasicLogger::new(Sink::writer(buffer.clone())).with_counter(SequenceCounter::new());
//! logger.set_level(Level::Warning);
//!
//! logger.info(&args!["dropped"]);
//! logger.warningf("%d%% full", &args![91]);
//!
//! assert!(buffer.contents().ends_with("WARNING|0001: 91% full\n"));
//! ```

mod config;
mod error;
pub mod format;
mod interfaces;
mod level;
mod loggers;
mod message;
mod sequence;
mod wrapper;

pub use self::config::{Config, ConfigBuilder, ExitHandler, Format, UtcOffset};
pub use self::error::{Error, Result};
pub use self::format::Value;
pub use self::interfaces::{
    Capabilities, CriticalLogger, DebugLeveledLogger, ExtendedLeveledLogger, LevelGetter,
    LevelSetter, LeveledLogger, OutputDepthGetter, OutputDepthSetter, ShortLeveledLogger,
    StdLogger, SubLogger,
};
pub use self::level::Level;
pub use self::loggers::{BasicLogger, LogFacade, MemoryBuffer, Sink};
#[cfg(feature = "termcolor")]
pub use self::loggers::TerminalMode;
pub use self::message::Message;
pub use self::sequence::SequenceCounter;
pub use self::wrapper::{LoggerWrapper, Tier};

#[cfg(feature = "termcolor")]
pub use termcolor::{Color, ColorChoice};

/// The logging interfaces, for glob imports.
pub mod prelude {
    pub use crate::interfaces::{
        Capabilities, CriticalLogger, DebugLeveledLogger, ExtendedLeveledLogger, LevelGetter,
        LevelSetter, LeveledLogger, OutputDepthGetter, OutputDepthSetter, ShortLeveledLogger,
        StdLogger, SubLogger,
    };
}
