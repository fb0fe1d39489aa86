//! Process-wide logging facade

use crate::core::{Environment, Logger, LoggerOptions, MetaValue, Result};
use crate::loggers::create_logger;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

static INSTANCE: OnceLock<LogService> = OnceLock::new();

/// The logger currently serving calls, and the options it was built from
struct Active {
    options: LoggerOptions,
    logger: Arc<dyn Logger>,
}

/// Stable logging entry point with a swappable backend.
///
/// Each call snapshots the active logger before writing, so a concurrent
/// [`configure`](LogService::configure) never splits one call across two
/// loggers. Errors from the backend are returned unchanged.
///
/// # Example
///
/// ```
/// use log_facade::core::{BackendRegistry, Environment, MemoryConsole};
/// use log_facade::{LogService, LoggerOptions};
/// use std::sync::Arc;
///
/// let console = MemoryConsole::new();
/// let env = Environment::new(BackendRegistry::new(), Arc::new(console.clone()));
/// let service = LogService::with_environment(LoggerOptions::new().kind("console"), env);
///
/// service.info("Application started", &[]).unwrap();
/// service.configure(LoggerOptions::new().kind("console").level("error"));
/// service.info("dropped", &[]).unwrap();
///
/// assert_eq!(console.messages(), vec!["[INFO] Application started"]);
/// ```
pub struct LogService {
    env: Environment,
    active: RwLock<Active>,
}

impl LogService {
    /// Return the process-wide instance, creating it from `options` (or the
    /// defaults) on first call. Later calls ignore `options`.
    pub fn get_instance(options: Option<LoggerOptions>) -> &'static LogService {
        INSTANCE.get_or_init(|| LogService::new(options.unwrap_or_default()))
    }

    /// Shorthand for `get_instance(None)`
    pub fn global() -> &'static LogService {
        Self::get_instance(None)
    }

    /// Whether the process-wide instance has been created yet
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// Standalone facade using the global registry and the process console
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_environment(options, Environment::default())
    }

    pub fn with_environment(options: LoggerOptions, env: Environment) -> Self {
        let logger = create_logger(&options, &env);
        Self {
            env,
            active: RwLock::new(Active { options, logger }),
        }
    }

    /// Replace the active logger with one built from `options` alone.
    ///
    /// Fields the caller leaves at their defaults take the defaults; nothing
    /// carries over from the previous configuration.
    pub fn configure(&self, options: LoggerOptions) {
        let logger = create_logger(&options, &self.env);
        *self.active.write() = Active { options, logger };
    }

    /// Options the active logger was built from
    pub fn options(&self) -> LoggerOptions {
        self.active.read().options
    }

    /// Name of the active logger variant
    pub fn backend_name(&self) -> String {
        self.current().name().to_string()
    }

    /// Snapshot of the active logger
    pub fn current(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.active.read().logger)
    }

    pub fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.current().info(message, meta)
    }

    pub fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.current().warn(message, meta)
    }

    pub fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.current().error(message, meta)
    }

    pub fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.current().debug(message, meta)
    }

    /// Alias for [`LogService::info`]
    pub fn log(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.info(message, meta)
    }

    /// Alias for [`LogService::debug`]
    pub fn verbose(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.debug(message, meta)
    }

    /// Alias for [`LogService::error`]
    pub fn fatal(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.error(message, meta)
    }
}

impl Logger for LogService {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        LogService::info(self, message, meta)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        LogService::warn(self, message, meta)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        LogService::error(self, message, meta)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        LogService::debug(self, message, meta)
    }

    fn name(&self) -> &str {
        "facade"
    }
}

impl fmt::Debug for LogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogService")
            .field("options", &self.options())
            .field("backend", &self.backend_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BackendRegistry, LogLevel, LoggerError, LoggerKind, MemoryConsole};

    fn service(options: LoggerOptions) -> (LogService, MemoryConsole) {
        let console = MemoryConsole::new();
        let env = Environment::new(BackendRegistry::empty(), Arc::new(console.clone()));
        (LogService::with_environment(options, env), console)
    }

    #[test]
    fn test_default_backend_is_structured() {
        let (service, _console) = service(LoggerOptions::default());
        assert_eq!(service.backend_name(), "structured");
        assert_eq!(service.options().level, LogLevel::Info);
    }

    #[test]
    fn test_configure_replaces_without_merge() {
        let (service, _console) = service(LoggerOptions::new().kind("console"));
        service.configure(
            LoggerOptions::new()
                .kind("formatted")
                .level("debug")
                .pretty_print(true),
        );
        assert_eq!(service.backend_name(), "formatted");

        // Level-only configure snaps kind and pretty_print back to defaults
        service.configure(LoggerOptions::new().level("warn"));
        let options = service.options();
        assert_eq!(options.kind, LoggerKind::Structured);
        assert_eq!(options.level, LogLevel::Warn);
        assert!(!options.pretty_print);
        assert_eq!(service.backend_name(), "structured");
    }

    #[test]
    fn test_aliases_forward() {
        let (service, console) = service(LoggerOptions::new().kind("console").level("debug"));
        service.log("a", &[&1]).unwrap();
        service.verbose("b", &[]).unwrap();
        service.fatal("c", &[]).unwrap();

        let lines = console.lines();
        assert_eq!(lines[0].level, LogLevel::Info);
        assert_eq!(lines[0].rendered(), "[INFO] a 1");
        assert_eq!(lines[1].message, "[DEBUG] b");
        assert_eq!(lines[2].message, "[ERROR] c");
    }

    #[test]
    fn test_delegate_errors_propagate() {
        struct Failing;

        impl Logger for Failing {
            fn info(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Err(LoggerError::writer("backend down"))
            }
            fn warn(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Ok(())
            }
            fn error(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Ok(())
            }
            fn debug(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                "failing"
            }
        }

        let (service, _console) = service(LoggerOptions::default());
        service.active.write().logger = Arc::new(Failing);

        let err = service.info("x", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Writer error: backend down");
        assert!(service.log("x", &[]).is_err());
        assert!(service.warn("x", &[]).is_ok());
    }

    #[test]
    fn test_reconfigure_from_inside_a_call() {
        type Slot = Arc<parking_lot::Mutex<Option<std::sync::Weak<LogService>>>>;

        struct Reentrant(Slot);

        impl Logger for Reentrant {
            fn info(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                if let Some(service) = self.0.lock().as_ref().and_then(|weak| weak.upgrade()) {
                    service.configure(LoggerOptions::new().kind("console"));
                }
                Ok(())
            }
            fn warn(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Ok(())
            }
            fn error(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Ok(())
            }
            fn debug(&self, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                "reentrant"
            }
        }

        let (service, console) = service(LoggerOptions::default());
        let service = Arc::new(service);
        let slot: Slot = Arc::default();
        *slot.lock() = Some(Arc::downgrade(&service));
        service.active.write().logger = Arc::new(Reentrant(Arc::clone(&slot)));

        service.info("swap", &[]).unwrap();
        assert_eq!(service.backend_name(), "console");

        service.info("after", &[]).unwrap();
        assert_eq!(console.messages(), vec!["[INFO] after"]);
    }

    #[test]
    fn test_service_is_a_logger() {
        let (service, console) = service(LoggerOptions::new().kind("console"));
        let as_logger: &dyn Logger = &service;
        as_logger.warn("via trait", &[]).unwrap();
        assert_eq!(as_logger.name(), "facade");
        assert_eq!(console.messages(), vec!["[WARN] via trait"]);
    }
}
