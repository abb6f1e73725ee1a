//! Byte-stream destinations for rendered lines.

use crate::{Config, Message};
#[cfg(feature = "termcolor")]
use crate::Level;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
#[cfg(feature = "termcolor")]
use termcolor::{BufferedStandardStream, ColorChoice, ColorSpec, WriteColor};

#[cfg(feature = "termcolor")]
struct OutputStreams {
    err: BufferedStandardStream,
    out: BufferedStandardStream,
}

#[cfg(feature = "termcolor")]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum TerminalMode {
    /// Only use Stdout
    Stdout,
    /// Only use Stderr
    Stderr,
    /// Use Stderr for errors and critical lines, Stdout otherwise
    #[default]
    Mixed,
}

enum Target {
    Writer(Box<dyn Write + Send>),
    #[cfg(feature = "termcolor")]
    Terminal(OutputStreams),
}

/// Where a logger writes its lines.
///
/// Clones share the destination, and writes through any clone are serialized.
#[derive(Clone)]
pub struct Sink {
    target: Arc<Mutex<Target>>,
}

impl Sink {
    /// A sink over any writer: a file, a socket, a [`MemoryBuffer`]...
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Sink {
        Sink::from_target(Target::Writer(Box::new(writer)))
    }

    pub fn stdout() -> Sink {
        Sink::writer(io::stdout())
    }

    pub fn stderr() -> Sink {
        Sink::writer(io::stderr())
    }

    /// A sink over the standard streams able to color level names.
    #[cfg(feature = "termcolor")]
    pub fn terminal(mode: TerminalMode, color_choice: ColorChoice) -> Sink {
        let streams = match mode {
            TerminalMode::Stdout => OutputStreams {
                err: BufferedStandardStream::stdout(color_choice),
                out: BufferedStandardStream::stdout(color_choice),
            },
            TerminalMode::Stderr => OutputStreams {
                err: BufferedStandardStream::stderr(color_choice),
                out: BufferedStandardStream::stderr(color_choice),
            },
            TerminalMode::Mixed => OutputStreams {
                err: BufferedStandardStream::stderr(color_choice),
                out: BufferedStandardStream::stdout(color_choice),
            },
        };
        Sink::from_target(Target::Terminal(streams))
    }

    fn from_target(target: Target) -> Sink {
        Sink {
            target: Arc::new(Mutex::new(target)),
        }
    }

    // A panicking caller must not take the sink down with it.
    fn lock(&self) -> MutexGuard<'_, Target> {
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes `header`, the message line and a newline, then flushes.
    #[cfg_attr(not(feature = "termcolor"), allow(unused_variables))]
    pub(crate) fn write_line(&self, config: &Config, header: &str, message: &Message) -> io::Result<()> {
        let line = message.line();
        match &mut *self.lock() {
            Target::Writer(writer) => {
                let mut buf = String::with_capacity(header.len() + line.len() + 1);
                buf.push_str(header);
                buf.push_str(&line);
                buf.push('\n');
                writer.write_all(buf.as_bytes())?;
                writer.flush()
            }
            #[cfg(feature = "termcolor")]
            Target::Terminal(streams) => {
                let level = message.level();
                let stream = match level {
                    Level::Error | Level::Critical => &mut streams.err,
                    _ => &mut streams.out,
                };
                write!(stream, "{}", header)?;
                let name = level.as_str();
                match config.color(level) {
                    Some(color) => {
                        stream.set_color(ColorSpec::new().set_fg(Some(color)))?;
                        write!(stream, "{}", name)?;
                        stream.reset()?;
                    }
                    None => write!(stream, "{}", name)?,
                }
                writeln!(stream, "{}", &line[name.len()..])?;
                // Buffered streams are not flushed at exit when the logger lives in a
                // static, and a fatal line must be out before the process ends.
                stream.flush()
            }
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match &mut *self.lock() {
            Target::Writer(writer) => writer.flush(),
            #[cfg(feature = "termcolor")]
            Target::Terminal(streams) => {
                streams.out.flush()?;
                streams.err.flush()
            }
        }
    }

    /// Checks whether both handles write to the same destination.
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.target, &other.target)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &*self.lock() {
            Target::Writer(_) => "Writer",
            #[cfg(feature = "termcolor")]
            Target::Terminal(_) => "Terminal",
        };
        f.debug_struct("Sink").field("target", &kind).finish()
    }
}

/// An in-memory writer whose clones share one buffer.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use unilogger::MemoryBuffer;
///
/// let buffer = MemoryBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> MemoryBuffer {
        MemoryBuffer::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
