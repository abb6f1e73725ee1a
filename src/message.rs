use crate::format::{self, Value};
use crate::Level;
use std::fmt;
use std::sync::OnceLock;

/// A single log record produced by [`BasicLogger`](crate::BasicLogger).
///
/// The text is rendered on first use and cached; the record is not meant to change
/// after construction.
#[derive(Debug)]
pub struct Message {
    id: u64,
    level: Level,
    format: Option<String>,
    args: Vec<Value>,
    rendered: OnceLock<String>,
}

impl Message {
    pub fn new(id: u64, level: Level, format: Option<&str>, args: &[Value]) -> Message {
        Message {
            id,
            level,
            format: format.map(str::to_owned),
            args: args.to_vec(),
            rendered: OnceLock::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The message text: the format applied to the arguments, or the arguments
    /// joined by spaces when there is no format.
    pub fn render(&self) -> &str {
        self.rendered
            .get_or_init(|| format::render(self.format.as_deref(), &self.args))
    }

    /// The canonical `LEVEL|id: text` line.
    ///
    /// Only the low 16 bits of the id are printed, so ids above `0xffff` wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use unilogger::{args, Level, Message};
    /// let message = Message::new(0x1_002a, Level::Warning, Some("%d%%"), &args![90]);
    /// assert_eq!(message.line(), "WARNING|002a: 90%");
    /// ```
    pub fn line(&self) -> String {
        format!("{}|{:04x}: {}", self.level, self.id & 0xffff, self.render())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{:04x}: {}", self.level, self.id & 0xffff, self.render())
    }
}
