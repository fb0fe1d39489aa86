//! Logger selection options

use super::{error::Result, log_level::LogLevel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of logger backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoggerKind {
    /// Plain-text console writer with its own level filter
    Console,
    /// Record-then-message structured writer (JSON lines, optional pretty transport)
    #[default]
    Structured,
    /// Message-then-metadata formatted writer (JSON or colorized single line)
    Formatted,
}

impl LoggerKind {
    pub fn name(&self) -> &'static str {
        match self {
            LoggerKind::Console => "console",
            LoggerKind::Structured => "structured",
            LoggerKind::Formatted => "formatted",
        }
    }

    /// Lenient parse: anything but an exact name or alias resolves to `Structured`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoggerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "console" | "plain" => Ok(LoggerKind::Console),
            "structured" | "pino" => Ok(LoggerKind::Structured),
            "formatted" | "winston" => Ok(LoggerKind::Formatted),
            _ => Err(format!("Invalid logger kind: '{}'", s)),
        }
    }
}

impl From<String> for LoggerKind {
    fn from(s: String) -> Self {
        LoggerKind::from_name(&s)
    }
}

impl From<&str> for LoggerKind {
    fn from(s: &str) -> Self {
        LoggerKind::from_name(s)
    }
}

impl From<LoggerKind> for String {
    fn from(kind: LoggerKind) -> Self {
        kind.name().to_string()
    }
}

/// Backend selection and level for a logger.
///
/// Every field defaults independently; a value only says what the caller set
/// in that one call. There is no merging with a previous configuration.
///
/// # Example
///
/// ```
/// use log_facade::{LoggerKind, LoggerOptions, LogLevel};
///
/// let options = LoggerOptions::new()
///     .kind("console")
///     .level("debug");
/// assert_eq!(options.kind, LoggerKind::Console);
/// assert_eq!(options.level, LogLevel::Debug);
/// assert!(!options.pretty_print);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerOptions {
    #[serde(alias = "type")]
    pub kind: LoggerKind,
    pub level: LogLevel,
    pub pretty_print: bool,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn kind(mut self, kind: impl Into<LoggerKind>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<LogLevel>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    /// Parse options from a JSON object such as
    /// `{"type": "console", "level": "debug", "prettyPrint": false}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
