//! Fallback policy for unavailable writer libraries
//!
//! When a logger cannot acquire its library it reports the failure once on
//! the console's warn channel and continues with one of the writers below.
//! They keep the calling convention of the library they replace, so the
//! logger's own code does not change.

use crate::backends::{LineWriter, Record, RecordWriter};
use crate::core::{Console, LogLevel, LoggerError, MetaValue, Result};
use std::sync::Arc;

/// Resolve an acquisition result, substituting `fallback` on failure.
///
/// Returns the writer and whether the fallback was used.
pub(crate) fn acquire_or_fallback<W: ?Sized>(
    acquired: Result<Box<W>>,
    console: &Arc<dyn Console>,
    owner: &str,
    fallback: impl FnOnce() -> Box<W>,
) -> (Box<W>, bool) {
    match acquired {
        Ok(writer) => (writer, false),
        Err(err) => {
            report_unavailable(console, owner, &err);
            (fallback(), true)
        }
    }
}

fn report_unavailable(console: &Arc<dyn Console>, owner: &str, err: &LoggerError) {
    let warning = format!(
        "[{}] {}. Falling back to console logger.",
        owner, err
    );
    // Nothing left to report a failing console to
    let _ = console.write(LogLevel::Warn, &warning, &[]);
}

/// Stands in for the record writer: `[LEVEL] message { meta: [...] }`
pub struct FallbackRecordWriter {
    console: Arc<dyn Console>,
}

impl FallbackRecordWriter {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl RecordWriter for FallbackRecordWriter {
    fn write(&self, level: LogLevel, record: &Record<'_>, message: &str) -> Result<()> {
        let line = format!("{}{}", level.tag(), message);
        let wrapped = format!("{:?}", record);
        self.console.write(level, &line, &[&wrapped])
    }
}

/// Stands in for the line writer: `[LEVEL] message` then metadata, unwrapped
pub struct FallbackLineWriter {
    console: Arc<dyn Console>,
}

impl FallbackLineWriter {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl LineWriter for FallbackLineWriter {
    fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        let line = format!("{}{}", level.tag(), message);
        self.console.write(level, &line, meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryConsole;

    #[test]
    fn test_fallback_record_writer_wraps_meta() {
        let console = MemoryConsole::new();
        let writer = FallbackRecordWriter::new(Arc::new(console.clone()));
        let meta: [&dyn MetaValue; 2] = [&"a", &1];
        writer.info(&Record::new(&meta), "hello").unwrap();

        let line = &console.lines()[0];
        assert_eq!(line.level, LogLevel::Info);
        assert_eq!(line.message, "[INFO] hello");
        assert_eq!(line.meta, vec!["{ meta: [\"a\", 1] }"]);
    }

    #[test]
    fn test_fallback_line_writer_spreads_meta() {
        let console = MemoryConsole::new();
        let writer = FallbackLineWriter::new(Arc::new(console.clone()));
        writer.error("boom", &[&"a", &1]).unwrap();

        let line = &console.lines()[0];
        assert_eq!(line.level, LogLevel::Error);
        assert_eq!(line.message, "[ERROR] boom");
        assert_eq!(line.meta, vec!["a", "1"]);
    }

    #[test]
    fn test_acquire_or_fallback_warns_once() {
        let console = MemoryConsole::new();
        let shared: Arc<dyn Console> = Arc::new(console.clone());

        let failed: Result<Box<dyn LineWriter>> =
            Err(LoggerError::backend_unavailable("line", "not registered"));
        let (_writer, used_fallback) = acquire_or_fallback(failed, &shared, "FormattedLogger", || {
            Box::new(FallbackLineWriter::new(Arc::clone(&shared))) as Box<dyn LineWriter>
        });

        assert!(used_fallback);
        let warnings = console.lines_at(LogLevel::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.starts_with("[FormattedLogger] Backend 'line' unavailable"));
        assert!(warnings[0].message.ends_with("Falling back to console logger."));
    }
}
