//! # Log Facade
//!
//! A single logging entry point for an application that can be re-pointed at
//! one of several backends at runtime.
//!
//! ## Features
//!
//! - **Stable Facade**: [`LogService`] is a process-wide singleton whose
//!   backend can be swapped with [`LogService::configure`]
//! - **Three Backends**: plain console, structured records and formatted lines
//! - **Graceful Fallback**: a backend whose writer library is unavailable
//!   degrades to console output with a one-time warning
//! - **Untouched Metadata**: values after the message reach the backend as
//!   the same borrowed references, in order
//!
//! ## Example
//!
//! ```
//! use log_facade::prelude::*;
//!
//! let service = LogService::get_instance(Some(LoggerOptions::new().kind("console")));
//! service.info("Application started", &[]).unwrap();
//!
//! let user_id = "12345";
//! service.info("User logged in", &[&user_id]).unwrap();
//!
//! service.configure(LoggerOptions::new().kind("formatted").level(LogLevel::Debug));
//! service.debug("Query executed", &[&"SELECT * FROM users", &45]).unwrap();
//! ```

pub mod backends;
pub mod core;
pub mod loggers;
pub mod macros;
pub mod service;

pub mod prelude {
    pub use crate::core::{
        LogLevel, Logger, LoggerError, LoggerKind, LoggerOptions, MetaValue, Result,
    };
    pub use crate::service::LogService;
}

pub use crate::core::{
    LogLevel, Logger, LoggerError, LoggerKind, LoggerOptions, MetaValue, Result,
};
pub use loggers::{create_logger, ConsoleLogger, FormattedLogger, StructuredLogger};
pub use service::LogService;
