//! Structured logger over the record writer library

use super::fallback::{acquire_or_fallback, FallbackRecordWriter};
use crate::backends::{Record, RecordWriter, RecordWriterConfig};
use crate::core::{Environment, LogLevel, Logger, MetaValue, Result};
use std::sync::Arc;

/// Delegates every call to a [`RecordWriter`] as `(Record { meta }, message)`.
///
/// The record comes first and the message second, matching the writer
/// library's native argument order; consumers of its output parse by that
/// shape. Level filtering belongs to the writer.
pub struct StructuredLogger {
    writer: Box<dyn RecordWriter>,
    fallback: bool,
}

impl StructuredLogger {
    /// Logger using the global registry and the process console
    pub fn new(level: impl Into<LogLevel>, pretty_print: bool) -> Self {
        Self::with_environment(level, pretty_print, &Environment::default())
    }

    pub fn with_environment(
        level: impl Into<LogLevel>,
        pretty_print: bool,
        env: &Environment,
    ) -> Self {
        let config = RecordWriterConfig::new(level.into(), pretty_print);
        let (writer, fallback) = acquire_or_fallback(
            env.registry.acquire_record_writer(&config),
            &env.console,
            "StructuredLogger",
            || Box::new(FallbackRecordWriter::new(Arc::clone(&env.console))) as Box<dyn RecordWriter>,
        );
        Self { writer, fallback }
    }

    /// Wrap an already constructed writer
    pub fn from_writer(writer: Box<dyn RecordWriter>) -> Self {
        Self {
            writer,
            fallback: false,
        }
    }

    /// True when the record writer library was unavailable at construction
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl Logger for StructuredLogger {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.info(&Record::new(meta), message)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.warn(&Record::new(meta), message)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.error(&Record::new(meta), message)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.writer.debug(&Record::new(meta), message)
    }

    fn name(&self) -> &str {
        "structured"
    }
}
