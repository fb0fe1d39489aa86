//! Console sinks: the four level-routed output channels
//!
//! Every plain-text writer in the crate (the console logger and both fallback
//! writers) emits through a [`Console`]. The default [`StdConsole`] routes
//! `Error` and `Warn` to stderr and `Info` and `Debug` to stdout.

use super::{
    error::Result,
    log_level::LogLevel,
    metadata::{display_meta, MetaValue},
};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

pub trait Console: Send + Sync {
    /// Write `message` followed by every metadata value, in order, to the
    /// channel selected by `level`.
    fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()>;
}

/// Render a console line: the message, then each metadata value separated by
/// a single space.
pub fn render_line(message: &str, meta: &[&dyn MetaValue]) -> String {
    let mut line = String::from(message);
    for value in meta {
        line.push(' ');
        line.push_str(&display_meta(*value));
    }
    line
}

/// Process stdout/stderr console
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    /// Shared handle, as stored by loggers
    pub fn shared() -> Arc<dyn Console> {
        Arc::new(Self)
    }
}

impl Console for StdConsole {
    fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        let line = render_line(message, meta);

        // Route Error and Warn levels to stderr, others to stdout
        match level {
            LogLevel::Error | LogLevel::Warn => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", line)?;
            }
            LogLevel::Info | LogLevel::Debug => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// A line captured by [`MemoryConsole`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub message: String,
    /// Display form of each metadata value, in order
    pub meta: Vec<String>,
}

impl CapturedLine {
    /// The line as [`StdConsole`] would print it
    pub fn rendered(&self) -> String {
        let mut line = self.message.clone();
        for value in &self.meta {
            line.push(' ');
            line.push_str(value);
        }
        line
    }
}

/// In-memory console, for tests and demos
///
/// # Example
///
/// ```
/// use log_facade::core::{Console, LogLevel, MemoryConsole};
///
/// let console = MemoryConsole::new();
/// console.write(LogLevel::Warn, "[WARN] shown", &[]).unwrap();
/// assert_eq!(console.lines()[0].message, "[WARN] shown");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured lines written to the `level` channel
    pub fn lines_at(&self, level: LogLevel) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.level == level)
            .cloned()
            .collect()
    }

    /// Messages of all captured lines, in order
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().iter().map(|line| line.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        let captured = CapturedLine {
            level,
            message: message.to_string(),
            meta: meta.iter().map(|value| display_meta(*value)).collect(),
        };
        self.lines.lock().push(captured);
        Ok(())
    }
}
