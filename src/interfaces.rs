//! Logging capability interfaces, from the plain `print`/`fatal`/`panic` family up to
//! the fully leveled one with explicit line variants.
//!
//! Methods take arguments as [`Value`] slices and formats as runtime strings, see
//! [`format`](crate::format). `fatal*` calls are expected to end the process and
//! `panic*` calls to unwind once the line has been written.
//!
//! Every logging method is `#[track_caller]`, so implementations see the location
//! of the outermost call even through trait objects and adapters.

use crate::format::Value;
use crate::Level;
use std::sync::Arc;

/// The `fatal` and `panic` calls shared by every tier.
pub trait CriticalLogger: Send + Sync {
    #[track_caller]
    fn fatal(&self, args: &[Value]);
    #[track_caller]
    fn fatalf(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn panic(&self, args: &[Value]);
    #[track_caller]
    fn panicf(&self, format: &str, args: &[Value]);
}

/// The interface of a standard-library style logger, with no notion of levels.
pub trait StdLogger: CriticalLogger {
    #[track_caller]
    fn print(&self, args: &[Value]);
    #[track_caller]
    fn printf(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn println(&self, args: &[Value]);
    #[track_caller]
    fn fatalln(&self, args: &[Value]);
    #[track_caller]
    fn panicln(&self, args: &[Value]);
}

/// A logger with the basic levels.
pub trait LeveledLogger: CriticalLogger {
    #[track_caller]
    fn debug(&self, args: &[Value]);
    #[track_caller]
    fn debugf(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn info(&self, args: &[Value]);
    #[track_caller]
    fn infof(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn warning(&self, args: &[Value]);
    #[track_caller]
    fn warningf(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn error(&self, args: &[Value]);
    #[track_caller]
    fn errorf(&self, format: &str, args: &[Value]);
}

/// [`LeveledLogger`] with the two extra verbose debug rungs.
pub trait DebugLeveledLogger: LeveledLogger {
    #[track_caller]
    fn debug2(&self, args: &[Value]);
    #[track_caller]
    fn debug2f(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn debug3(&self, args: &[Value]);
    #[track_caller]
    fn debug3f(&self, format: &str, args: &[Value]);
}

/// A leveled logger that spells the warning level `warn`.
pub trait ShortLeveledLogger: CriticalLogger {
    #[track_caller]
    fn debug(&self, args: &[Value]);
    #[track_caller]
    fn debugf(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn info(&self, args: &[Value]);
    #[track_caller]
    fn infof(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn warn(&self, args: &[Value]);
    #[track_caller]
    fn warnf(&self, format: &str, args: &[Value]);
    #[track_caller]
    fn error(&self, args: &[Value]);
    #[track_caller]
    fn errorf(&self, format: &str, args: &[Value]);
}

/// The richest tier: every level in the bare, formatted and line-terminated shapes,
/// plus the `print` family.
pub trait ExtendedLeveledLogger: DebugLeveledLogger + StdLogger {
    #[track_caller]
    fn debug3ln(&self, args: &[Value]);
    #[track_caller]
    fn debug2ln(&self, args: &[Value]);
    #[track_caller]
    fn debugln(&self, args: &[Value]);
    #[track_caller]
    fn infoln(&self, args: &[Value]);
    #[track_caller]
    fn warningln(&self, args: &[Value]);
    #[track_caller]
    fn errorln(&self, args: &[Value]);
}

/// Creates loggers one call frame deeper than their parent.
pub trait SubLogger {
    type Sub: LeveledLogger;

    fn sub_logger(&self) -> Self::Sub;
}

pub trait LevelSetter {
    #[track_caller]
    fn set_level(&self, level: Level);
}

pub trait LevelGetter {
    fn level(&self) -> Level;
}

/// Frame depth a logger reports for its calls.
///
/// The value is advisory: locations come from `#[track_caller]`, which already
/// skips the logger's own frames, so changing the depth does not move them.
pub trait OutputDepthSetter {
    fn set_output_depth(&self, depth: usize);
}

pub trait OutputDepthGetter {
    fn output_depth(&self) -> usize;
}

/// Runtime query of the tiers a logger satisfies.
///
/// Every probe hands the logger back as the matching trait object, or `None` when
/// the tier is not supported. Implement it with the [`capabilities!`](crate::capabilities)
/// macro rather than by hand.
pub trait Capabilities: Send + Sync {
    fn extended(self: Arc<Self>) -> Option<Arc<dyn ExtendedLeveledLogger>> {
        None
    }

    fn short_leveled(self: Arc<Self>) -> Option<Arc<dyn ShortLeveledLogger>> {
        None
    }

    fn leveled(self: Arc<Self>) -> Option<Arc<dyn LeveledLogger>> {
        None
    }

    fn std_logger(self: Arc<Self>) -> Option<Arc<dyn StdLogger>> {
        None
    }
}

/// Declares which tiers a logger type satisfies.
///
/// Tiers are `extended`, `short_leveled`, `leveled` and `std_logger`; each one
/// requires the type to implement the matching trait.
///
/// # Examples
///
/// ```
/// use unilogger::{capabilities, CriticalLogger, StdLogger, Value};
///
/// struct Console;
///
/// impl CriticalLogger for Console {
///     fn fatal(&self, _: &[Value]) {}
///     fn fatalf(&self, _: &str, _: &[Value]) {}
///     fn panic(&self, _: &[Value]) {}
///     fn panicf(&self, _: &str, _: &[Value]) {}
/// }
///
/// impl StdLogger for Console {
///     fn print(&self, _: &[Value]) {}
///     fn printf(&self, _: &str, _: &[Value]) {}
///     fn println(&self, _: &[Value]) {}
///     fn fatalln(&self, _: &[Value]) {}
///     fn panicln(&self, _: &[Value]) {}
/// }
///
/// capabilities!(Console: std_logger);
/// ```
#[macro_export]
macro_rules! capabilities {
    (@probe extended) => {
        fn extended(
            self: ::std::sync::Arc<Self>,
        ) -> ::std::option::Option<::std::sync::Arc<dyn $crate::ExtendedLeveledLogger>> {
            ::std::option::Option::Some(self)
        }
    };
    (@probe short_leveled) => {
        fn short_leveled(
            self: ::std::sync::Arc<Self>,
        ) -> ::std::option::Option<::std::sync::Arc<dyn $crate::ShortLeveledLogger>> {
            ::std::option::Option::Some(self)
        }
    };
    (@probe leveled) => {
        fn leveled(
            self: ::std::sync::Arc<Self>,
        ) -> ::std::option::Option<::std::sync::Arc<dyn $crate::LeveledLogger>> {
            ::std::option::Option::Some(self)
        }
    };
    (@probe std_logger) => {
        fn std_logger(
            self: ::std::sync::Arc<Self>,
        ) -> ::std::option::Option<::std::sync::Arc<dyn $crate::StdLogger>> {
            ::std::option::Option::Some(self)
        }
    };
    ($ty:ty : $($tier:ident),+ $(,)?) => {
        impl $crate::Capabilities for $ty {
            $($crate::capabilities!(@probe $tier);)+
        }
    };
}
