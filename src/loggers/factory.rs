//! Logger selection

use super::{ConsoleLogger, FormattedLogger, StructuredLogger};
use crate::core::{Environment, Logger, LoggerKind, LoggerOptions};
use std::sync::Arc;

/// Build the logger described by `options`.
///
/// Never fails: a variant whose writer library is unavailable falls back on
/// its own.
pub fn create_logger(options: &LoggerOptions, env: &Environment) -> Arc<dyn Logger> {
    match options.kind {
        LoggerKind::Console => Arc::new(ConsoleLogger::with_environment(options.level, env)),
        LoggerKind::Structured => Arc::new(StructuredLogger::with_environment(
            options.level,
            options.pretty_print,
            env,
        )),
        LoggerKind::Formatted => Arc::new(FormattedLogger::with_environment(
            options.level,
            options.pretty_print,
            env,
        )),
    }
}
