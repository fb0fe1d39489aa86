//! Writer backends consumed by the structured and formatted loggers
//!
//! Each backend is a trait plus one built-in implementation. Loggers never
//! construct writers directly; they acquire them from a
//! [`BackendRegistry`](crate::core::BackendRegistry), which is what makes a
//! backend "available".

pub mod line;
pub mod record;

pub use line::{LineFormat, LineWriter, LineWriterConfig, StreamLineWriter};
pub use record::{JsonRecordWriter, PrettyTransport, Record, RecordWriter, RecordWriterConfig};

use crate::core::LogLevel;

/// Color `label` with the level's color when `colorize` is set
#[cfg(feature = "colored")]
pub(crate) fn paint(level: LogLevel, label: &str, colorize: bool) -> String {
    use colored::Colorize;
    if colorize {
        label.color(level.color_code()).to_string()
    } else {
        label.to_string()
    }
}

#[cfg(not(feature = "colored"))]
pub(crate) fn paint(_level: LogLevel, label: &str, _colorize: bool) -> String {
    label.to_string()
}
