//! Logger variants and the factory that selects between them

pub mod console;
pub mod factory;
pub mod fallback;
pub mod formatted;
pub mod structured;

pub use console::ConsoleLogger;
pub use factory::create_logger;
pub use fallback::{FallbackLineWriter, FallbackRecordWriter};
pub use formatted::FormattedLogger;
pub use structured::StructuredLogger;

// Re-export the trait so `use log_facade::loggers::*` is enough to log
pub use crate::core::Logger;
