#[cfg(feature = "termcolor")]
use crate::Level;
#[cfg(feature = "termcolor")]
use termcolor::Color;
pub use time::UtcOffset;

/// Header fields written in front of every line, combined as bit flags.
///
/// With no flags set a line is exactly `LEVEL|id: text`.
#[allow(non_upper_case_globals, non_snake_case)]
pub mod Format {
    /// Local date: `2009/01/23`
    pub const Date: u8 = 1;
    /// Local time: `01:23:23`
    pub const Time: u8 = 2;
    /// Microsecond resolution: `01:23:23.123123`. Implies `Time`.
    pub const Microseconds: u8 = 4;
    /// Full source path and line of the logging call: `src/main.rs:23`
    pub const LongFile: u8 = 8;
    /// Final path element and line, overrides `LongFile`: `main.rs:23`
    pub const ShortFile: u8 = 16;
    /// Use UTC rather than the configured offset for date and time.
    pub const Utc: u8 = 32;
    /// Move the prefix from the start of the line to just before the message.
    pub const MsgPrefix: u8 = 64;
    /// Date and time, the usual choice for console output.
    pub const Std: u8 = Date | Time;
}

/// Called with the exit status after a `fatal` line has been written.
pub type ExitHandler = fn(i32);

pub(crate) fn exit_process(code: i32) {
    std::process::exit(code)
}

/// Configuration for [`BasicLogger`](crate::BasicLogger).
///
/// Lines are written as:
/// `prefix 2009/01/23 01:23:23 main.rs:23: LEVEL|id: text`
/// where every part in front of the level is optional and off by default.
///
/// Construct using [`Default`](Config::default) or using [`ConfigBuilder`]
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) prefix: String,
    pub(crate) format: u8,
    pub(crate) time_offset: UtcOffset,
    #[cfg(feature = "termcolor")]
    pub(crate) level_color: [Option<Color>; 9],
    pub(crate) enable_colors: bool,
    pub(crate) exit_handler: ExitHandler,
}

impl Config {
    /// Create a new default `ConfigBuilder`
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn format(&self) -> u8 {
        self.format
    }

    #[cfg(feature = "termcolor")]
    pub(crate) fn color(&self, level: Level) -> Option<Color> {
        if self.enable_colors {
            self.level_color[level as usize]
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ConfigBuilder(Config);

impl ConfigBuilder {
    /// Create a new default ConfigBuilder
    pub fn new() -> ConfigBuilder {
        ConfigBuilder(Config::default())
    }

    /// Set the text written at the start of each line, or before the message with
    /// [`Format::MsgPrefix`].
    pub fn set_prefix(&mut self, prefix: &str) -> &mut ConfigBuilder {
        self.0.prefix = prefix.to_owned();
        self
    }

    /// Set header fields, see [`Format`]
    pub fn set_format(&mut self, format: u8) -> &mut ConfigBuilder {
        self.0.format = format;
        self
    }

    /// Set offset used for logging time (default is UTC)
    pub fn set_time_offset(&mut self, offset: UtcOffset) -> &mut ConfigBuilder {
        self.0.time_offset = offset;
        self
    }

    /// Sets the offset used to the current local time offset
    /// (overriding values previously set by [`ConfigBuilder::set_time_offset`]).
    ///
    /// This function may fail if the offset cannot be determined soundly.
    /// This may be the case, when the program is multi-threaded by the time of calling this function.
    #[cfg(feature = "local-offset")]
    pub fn set_time_offset_to_local(&mut self) -> Result<&mut ConfigBuilder, &mut ConfigBuilder> {
        match UtcOffset::current_local_offset() {
            Ok(offset) => {
                self.0.time_offset = offset;
                Ok(self)
            }
            Err(_) => Err(self),
        }
    }

    /// Set the color used for printing the level name on a terminal,
    /// or None to use the default foreground color
    #[cfg(feature = "termcolor")]
    pub fn set_level_color(&mut self, level: Level, color: Option<Color>) -> &mut ConfigBuilder {
        self.0.level_color[level as usize] = color;
        self
    }

    /// Color level names on terminal sinks (default is off)
    pub fn set_enable_colors(&mut self, enable: bool) -> &mut ConfigBuilder {
        self.0.enable_colors = enable;
        self
    }

    /// Replace what runs after a `fatal` line is written (default exits the process).
    pub fn set_exit_handler(&mut self, handler: ExitHandler) -> &mut ConfigBuilder {
        self.0.exit_handler = handler;
        self
    }

    /// Build new `Config`
    pub fn build(&mut self) -> Config {
        self.0.clone()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            prefix: String::new(),
            format: 0,
            time_offset: UtcOffset::UTC,
            #[cfg(feature = "termcolor")]
            level_color: [
                Some(Color::White),   // Debug3
                Some(Color::White),   // Debug2
                Some(Color::Cyan),    // Debug
                Some(Color::Blue),    // Info
                Some(Color::Yellow),  // Warning
                Some(Color::Red),     // Error
                Some(Color::Magenta), // Critical
                None,                 // Print
                None,                 // Unknown
            ],
            enable_colors: false,
            exit_handler: exit_process,
        }
    }
}
