//! Timestamp formatting utilities
//!
//! The built-in writers stamp each line with one of these formats: JSON lines
//! carry ISO 8601 or Unix milliseconds, pretty lines carry local wall-clock
//! time.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use log_facade::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// strftime format rendered in the local time zone
    ///
    /// ```
    /// use log_facade::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Local("%Y-%m-%d %H:%M:%S".to_string());
    /// ```
    Local(String),
}

impl TimestampFormat {
    /// `HH:MM:SS +zzzz`, the pretty record transport's time
    pub fn clock() -> Self {
        TimestampFormat::Local("%H:%M:%S %z".to_string())
    }

    /// `YYYY-MM-DD HH:MM:SS`, the pretty line format's time
    pub fn date_time() -> Self {
        TimestampFormat::Local("%Y-%m-%d %H:%M:%S".to_string())
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Local(format_str) => datetime
                .with_timezone(&Local)
                .format(format_str)
                .to_string(),
        }
    }

    /// Format the current time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }

    /// JSON value for this format: numeric for Unix milliseconds, string otherwise
    #[must_use]
    pub fn json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }
}
