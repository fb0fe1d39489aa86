//! Plain-text console logger

use crate::core::{Console, Environment, LogLevel, Logger, MetaValue, Result, StdConsole};
use std::sync::Arc;

/// Writes `[LEVEL] message` plus metadata to the matching console channel.
///
/// This is the only variant that filters by level itself: a message at level
/// `M` is written iff `M.rank() <= level.rank()`.
///
/// # Example
///
/// ```
/// use log_facade::core::{LogLevel, Logger, MemoryConsole};
/// use log_facade::loggers::ConsoleLogger;
/// use std::sync::Arc;
///
/// let console = MemoryConsole::new();
/// let logger = ConsoleLogger::with_console(LogLevel::Warn, Arc::new(console.clone()));
///
/// logger.info("hidden", &[]).unwrap();
/// logger.warn("shown", &[]).unwrap();
/// assert_eq!(console.messages(), vec!["[WARN] shown"]);
/// ```
pub struct ConsoleLogger {
    level: LogLevel,
    console: Arc<dyn Console>,
}

impl ConsoleLogger {
    /// Logger writing to stdout/stderr
    pub fn new(level: impl Into<LogLevel>) -> Self {
        Self::with_console(level, StdConsole::shared())
    }

    pub fn with_console(level: impl Into<LogLevel>, console: Arc<dyn Console>) -> Self {
        Self {
            level: level.into(),
            console,
        }
    }

    pub fn with_environment(level: impl Into<LogLevel>, env: &Environment) -> Self {
        Self::with_console(level, Arc::clone(&env.console))
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.level.allows(level)
    }

    fn emit(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        if !self.should_log(level) {
            return Ok(());
        }
        let line = format!("{}{}", level.tag(), message);
        self.console.write(level, &line, meta)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.emit(LogLevel::Info, message, meta)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.emit(LogLevel::Warn, message, meta)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.emit(LogLevel::Error, message, meta)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.emit(LogLevel::Debug, message, meta)
    }

    fn name(&self) -> &str {
        "console"
    }
}
