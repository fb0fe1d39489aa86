//! Logging macros for ergonomic message formatting.
//!
//! Each macro formats its message like `format!` and forwards it, with any
//! metadata listed after a `;`, to the matching [`Logger`](crate::Logger)
//! method. The logger may be a value, a reference, an `Arc`, or the facade.
//! Every macro evaluates to the call's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use log_facade::core::MemoryConsole;
//! use log_facade::loggers::ConsoleLogger;
//! use log_facade::{info, warn};
//! use std::sync::Arc;
//!
//! let console = MemoryConsole::new();
//! let logger = ConsoleLogger::with_console("info", Arc::new(console.clone()));
//!
//! // Plain message
//! info!(logger, "Server started").unwrap();
//!
//! // Format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // Metadata after the semicolon
//! let user_id = "12345";
//! warn!(logger, "Retry attempt {} of {}", 3, 5; user_id, 42).unwrap();
//!
//! assert_eq!(console.len(), 3);
//! assert_eq!(console.lines()[2].rendered(), "[WARN] Retry attempt 3 of 5 12345 42");
//! ```

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use log_facade::loggers::ConsoleLogger;
/// # let logger = ConsoleLogger::default();
/// use log_facade::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100; "batch-7").unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::info(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use log_facade::loggers::ConsoleLogger;
/// # let logger = ConsoleLogger::default();
/// use log_facade::warn;
/// warn!(logger, "Low disk space").unwrap();
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::warn(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use log_facade::loggers::ConsoleLogger;
/// # let logger = ConsoleLogger::default();
/// use log_facade::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}", 500; "postgres").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::error(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use log_facade::loggers::ConsoleLogger;
/// # let logger = ConsoleLogger::new("debug");
/// use log_facade::debug;
/// debug!(logger, "Debug information").unwrap();
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::debug(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}

/// Alias of [`info!`](crate::info) through [`Logger::log`](crate::Logger::log)
#[macro_export]
macro_rules! log {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::log(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}

/// Alias of [`debug!`](crate::debug) through [`Logger::verbose`](crate::Logger::verbose)
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::verbose(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}

/// Log a fatal message. Lands at error level.
///
/// # Examples
///
/// ```
/// # use log_facade::loggers::ConsoleLogger;
/// # let logger = ConsoleLogger::default();
/// use log_facade::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(; $($meta:expr),+)? $(,)?) => {
        $crate::Logger::fatal(
            &$logger,
            &::std::format!($fmt $(, $arg)*),
            &[$($(&$meta as &dyn $crate::MetaValue),+)?],
        )
    };
}
