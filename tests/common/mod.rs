#![allow(dead_code)]

use std::sync::{Mutex, PoisonError};
use unilogger::*;

/// One call received by a recording logger.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub format: Option<String>,
    pub args: Vec<Value>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn record(&self, method: &'static str, format: Option<&str>, args: &[Value]) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(Call {
            method,
            format: format.map(str::to_owned),
            args: args.to_vec(),
        });
    }

    /// Returns the calls received so far and forgets them.
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

macro_rules! record {
    ($($name:ident),* ; $($fname:ident),*) => {
        $(
            fn $name(&self, args: &[Value]) {
                self.0.record(stringify!($name), None, args);
            }
        )*
        $(
            fn $fname(&self, format: &str, args: &[Value]) {
                self.0.record(stringify!($fname), Some(format), args);
            }
        )*
    };
}

macro_rules! critical {
    ($($ty:ty),+) => {
        $(
            impl CriticalLogger for $ty {
                record!(fatal, panic; fatalf, panicf);
            }
        )+
    };
}

/// Only knows the `print` family.
#[derive(Debug, Default)]
pub struct StdOnly(pub Recorder);

/// Only knows the `warning` spelling of the leveled interface.
#[derive(Debug, Default)]
pub struct LeveledOnly(pub Recorder);

/// Only knows the `warn` spelling of the leveled interface.
#[derive(Debug, Default)]
pub struct ShortOnly(pub Recorder);

/// Knows every method.
#[derive(Debug, Default)]
pub struct ExtendedOnly(pub Recorder);

/// Leveled and std at once, like most loggers built on a standard one.
#[derive(Debug, Default)]
pub struct LeveledAndStd(pub Recorder);

/// Has no logging interface.
pub struct NonLogger;

critical!(StdOnly, LeveledOnly, ShortOnly, ExtendedOnly, LeveledAndStd);

impl StdLogger for StdOnly {
    record!(print, println, fatalln, panicln; printf);
}

impl LeveledLogger for LeveledOnly {
    record!(debug, info, warning, error; debugf, infof, warningf, errorf);
}

impl ShortLeveledLogger for ShortOnly {
    record!(debug, info, warn, error; debugf, infof, warnf, errorf);
}

impl StdLogger for ExtendedOnly {
    record!(print, println, fatalln, panicln; printf);
}

impl LeveledLogger for ExtendedOnly {
    record!(debug, info, warning, error; debugf, infof, warningf, errorf);
}

impl DebugLeveledLogger for ExtendedOnly {
    record!(debug2, debug3; debug2f, debug3f);
}

impl ExtendedLeveledLogger for ExtendedOnly {
    record!(debug3ln, debug2ln, debugln, infoln, warningln, errorln;);
}

impl StdLogger for LeveledAndStd {
    record!(print, println, fatalln, panicln; printf);
}

impl LeveledLogger for LeveledAndStd {
    record!(debug, info, warning, error; debugf, infof, warningf, errorf);
}

capabilities!(StdOnly: std_logger);
capabilities!(LeveledOnly: leveled);
capabilities!(ShortOnly: short_leveled);
capabilities!(ExtendedOnly: extended);
capabilities!(LeveledAndStd: leveled, std_logger);

impl Capabilities for NonLogger {}
