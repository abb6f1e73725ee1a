mod basic;
mod facade;
pub(crate) mod logging;
mod sink;

pub use self::basic::BasicLogger;
pub use self::facade::LogFacade;
#[cfg(feature = "termcolor")]
pub use self::sink::TerminalMode;
pub use self::sink::{MemoryBuffer, Sink};
