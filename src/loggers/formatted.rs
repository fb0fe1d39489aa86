//! Formatted logger over the line writer library

use super::fallback::{acquire_or_fallback, FallbackLineWriter};
use crate::backends::{LineWriter, LineWriterConfig};
use crate::core::{Environment, LogLevel, Logger, MetaValue, Result};
use std::sync::Arc;

/// Forwards `(message, meta)` to a [`LineWriter`] unchanged.
///
/// Unlike [`StructuredLogger`](super::StructuredLogger) there is no record
/// wrapping: the writer library takes metadata positionally after the message.
pub struct FormattedLogger {
    writer: Box<dyn LineWriter>,
    fallback: bool,
}

impl FormattedLogger {
    pub fn new(level: impl Into<LogLevel>, pretty_print: bool) -> Self {
        Self::with_environment(level, pretty_print, &Environment::default())
    }

    pub fn with_environment(
        level: impl Into<LogLevel>,
        pretty_print: bool,
        env: &Environment,
    ) -> Self {
        let config = LineWriterConfig::new(level.into(), pretty_print);
        let (writer, fallback) = acquire_or_fallback(
            env.registry.acquire_line_writer(&config),
            &env.console,
            "FormattedLogger",
            || Box::new(FallbackLineWriter::new(Arc::clone(&env.console))) as Box<dyn LineWriter>,
        );
        Self { writer, fallback }
    }

    pub fn from_writer(writer: Box<dyn LineWriter>) -> Self {
        Self {
            writer,
            fallback: false,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl Logger for FormattedLogger {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.info(message, meta)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.warn(message, meta)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.error(message, meta)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.debug(message, meta)
    }

    fn name(&self) -> &str {
        "formatted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BackendRegistry, LoggerError, MemoryConsole};
    use parking_lot::Mutex;

    /// Records the address of every metadata value it receives
    #[derive(Clone, Default)]
    struct AddressWriter(Arc<Mutex<Vec<(LogLevel, String, Vec<usize>)>>>);

    impl LineWriter for AddressWriter {
        fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
            let addrs = meta
                .iter()
                .map(|value| *value as *const _ as *const () as usize)
                .collect();
            self.0.lock().push((level, message.to_string(), addrs));
            Ok(())
        }
    }

    fn addr<T>(value: &T) -> usize {
        value as *const T as usize
    }

    #[test]
    fn test_metadata_passes_through_untouched() {
        let writer = AddressWriter::default();
        let registry = BackendRegistry::empty();
        let handle = writer.clone();
        registry.register_line_writer(move |_config: &LineWriterConfig| {
            Ok(Box::new(handle.clone()) as Box<dyn LineWriter>)
        });
        let env = Environment::new(registry, Arc::new(MemoryConsole::new()));
        let logger = FormattedLogger::with_environment(LogLevel::Info, false, &env);

        let a = String::from("a");
        let b = vec![0u8, 1, 2];
        let c = 7_u64;
        logger.warn("m", &[&a, &b, &c]).unwrap();

        let calls = writer.0.lock().clone();
        assert_eq!(calls[0].0, LogLevel::Warn);
        assert_eq!(calls[0].1, "m");
        assert_eq!(calls[0].2, vec![addr(&a), addr(&b), addr(&c)]);
    }

    #[test]
    fn test_missing_backend_falls_back() {
        let console = MemoryConsole::new();
        let env = Environment::new(BackendRegistry::empty(), Arc::new(console.clone()));
        let logger = FormattedLogger::with_environment("debug", true, &env);
        assert!(logger.is_fallback());

        logger.debug("Query executed", &[&"SELECT 1", &45]).unwrap();

        let lines = console.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].message.starts_with("[FormattedLogger]"));
        assert_eq!(lines[1].level, LogLevel::Debug);
        assert_eq!(lines[1].message, "[DEBUG] Query executed");
        assert_eq!(lines[1].meta, vec!["SELECT 1", "45"]);
    }

    #[test]
    fn test_writer_errors_propagate() {
        struct BrokenWriter;

        impl LineWriter for BrokenWriter {
            fn write(&self, _: LogLevel, _: &str, _: &[&dyn MetaValue]) -> Result<()> {
                Err(LoggerError::writer("EPIPE"))
            }
        }

        let logger = FormattedLogger::from_writer(Box::new(BrokenWriter));
        assert!(logger.error("x", &[]).is_err());
        assert!(logger.fatal("x", &[]).is_err());
    }
}
