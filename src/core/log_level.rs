//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Levels are ordered by rank: `Error` (0) is the most severe and `Debug` (3)
/// the most verbose. A logger configured at level `L` emits a message at level
/// `M` iff `M.rank() <= L.rank()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// All levels, most severe first
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Lowercase name, as used in configuration and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Returns true if a message at `message_level` passes a filter set to `self`
    #[inline]
    pub fn allows(&self, message_level: LogLevel) -> bool {
        message_level.rank() <= self.rank()
    }

    /// Lenient parse: anything but an exact lowercase name resolves to `Info`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Bracketed tag used by the plain-text writers, e.g. `[WARN] `
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Error => "[ERROR] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG] ",
        }
    }

    #[cfg(feature = "colored")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Names are matched exactly: no trimming, no case folding
        match s {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl From<String> for LogLevel {
    fn from(s: String) -> Self {
        LogLevel::from_name(&s)
    }
}

impl From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        LogLevel::from_name(s)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.name().to_string()
    }
}
