//! Core facade types and traits

pub mod console;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metadata;
pub mod options;
pub mod registry;
pub mod timestamp;

pub use console::{CapturedLine, Console, MemoryConsole, StdConsole};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metadata::MetaValue;
pub use options::{LoggerKind, LoggerOptions};
pub use registry::{
    BackendRegistry, Environment, LineWriterFactory, RecordWriterFactory, LINE_BACKEND,
    RECORD_BACKEND,
};
pub use timestamp::TimestampFormat;
