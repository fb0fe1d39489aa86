//! Line writer: the formatted library behind [`FormattedLogger`]
//!
//! Calls take the message first, then the metadata spread positionally.
//! Metadata values that convert to JSON objects are merged into the line's
//! fields; any other value is kept, in order, under `meta`.
//!
//! [`FormattedLogger`]: crate::loggers::FormattedLogger

use crate::core::{metadata::meta_to_json, LogLevel, MetaValue, Result, TimestampFormat};
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::io::Write;

/// Output format of a line writer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineFormat {
    #[default]
    /// `{"level":"info","message":"...","timestamp":"2025-01-08T10:30:45.123Z",...}`
    Json,

    /// `2025-01-08 10:30:45 info: message {"userId":"12345"}`
    Pretty { colorize: bool },
}

/// Configuration handed to a line writer factory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineWriterConfig {
    pub level: LogLevel,
    pub format: LineFormat,
}

impl LineWriterConfig {
    pub fn new(level: LogLevel, pretty_print: bool) -> Self {
        let format = if pretty_print {
            LineFormat::Pretty { colorize: true }
        } else {
            LineFormat::Json
        };
        Self { level, format }
    }
}

/// Message-then-metadata writer
pub trait LineWriter: Send + Sync {
    fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()>;

    #[inline]
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.write(LogLevel::Info, message, meta)
    }

    #[inline]
    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.write(LogLevel::Warn, message, meta)
    }

    #[inline]
    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.write(LogLevel::Error, message, meta)
    }

    #[inline]
    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.write(LogLevel::Debug, message, meta)
    }
}

/// Merge metadata into line fields
fn collect_fields(meta: &[&dyn MetaValue]) -> Map<String, Value> {
    let mut fields = Map::new();
    let mut positional = Vec::new();

    for value in meta {
        match meta_to_json(*value) {
            Value::Object(object) => fields.extend(object),
            other => positional.push(other),
        }
    }

    if !positional.is_empty() {
        fields.insert("meta".to_string(), Value::Array(positional));
    }
    fields
}

/// Built-in line writer over any byte stream
pub struct StreamLineWriter {
    config: LineWriterConfig,
    output: Mutex<Box<dyn Write + Send>>,
}

impl StreamLineWriter {
    /// Writer targeting stdout
    pub fn new(config: LineWriterConfig) -> Self {
        Self::with_output(config, Box::new(std::io::stdout()))
    }

    pub fn with_output(config: LineWriterConfig, output: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            output: Mutex::new(output),
        }
    }

    pub fn config(&self) -> &LineWriterConfig {
        &self.config
    }

    fn format_json(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<String> {
        let mut object = collect_fields(meta);
        object.insert("level".to_string(), level.name().into());
        object.insert("message".to_string(), message.into());
        object.insert(
            "timestamp".to_string(),
            TimestampFormat::Iso8601.json_value(&Utc::now()),
        );
        Ok(serde_json::to_string(&Value::Object(object))?)
    }

    fn format_pretty(
        &self,
        colorize: bool,
        level: LogLevel,
        message: &str,
        meta: &[&dyn MetaValue],
    ) -> Result<String> {
        let fields = collect_fields(meta);
        let mut line = format!(
            "{} {}: {}",
            TimestampFormat::date_time().now(),
            super::paint(level, level.name(), colorize),
            message
        );
        if !fields.is_empty() {
            line.push(' ');
            line.push_str(&serde_json::to_string(&Value::Object(fields))?);
        }
        Ok(line)
    }
}

impl LineWriter for StreamLineWriter {
    fn write(&self, level: LogLevel, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        if !self.config.level.allows(level) {
            return Ok(());
        }

        let line = match self.config.format {
            LineFormat::Json => self.format_json(level, message, meta)?,
            LineFormat::Pretty { colorize } => self.format_pretty(colorize, level, message, meta)?,
        };

        let mut output = self.output.lock();
        writeln!(output, "{}", line)?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().clone())
                .unwrap()
                .lines()
                .map(String::from)
                .collect()
        }
    }

    fn writer(level: LogLevel, format: LineFormat) -> (StreamLineWriter, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let writer = StreamLineWriter::with_output(
            LineWriterConfig { level, format },
            Box::new(buffer.clone()),
        );
        (writer, buffer)
    }

    #[test]
    fn test_json_merges_object_metadata() {
        let (writer, buffer) = writer(LogLevel::Info, LineFormat::Json);
        writer
            .info("User logged in", &[&json!({"userId": "12345"}), &42, &"extra"])
            .unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        let parsed: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["message"], "User logged in");
        assert_eq!(parsed["userId"], "12345");
        assert_eq!(parsed["meta"], json!([42, "extra"]));
        assert!(parsed["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_pretty_line() {
        let (writer, buffer) = writer(LogLevel::Debug, LineFormat::Pretty { colorize: false });
        writer.warn("High memory usage", &[&json!({"usage": "85%"})]).unwrap();
        writer.debug("no fields", &[]).unwrap();

        let lines = buffer.lines();
        assert!(lines[0].ends_with(" warn: High memory usage {\"usage\":\"85%\"}"));
        assert!(lines[1].ends_with(" debug: no fields"));
    }

    #[test]
    fn test_level_filtering() {
        let (writer, buffer) = writer(LogLevel::Error, LineFormat::Json);
        writer.warn("hidden", &[]).unwrap();
        writer.info("hidden", &[]).unwrap();
        writer.error("shown", &[]).unwrap();

        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_config_from_pretty_flag() {
        assert_eq!(LineWriterConfig::new(LogLevel::Info, false).format, LineFormat::Json);
        assert_eq!(
            LineWriterConfig::new(LogLevel::Info, true).format,
            LineFormat::Pretty { colorize: true }
        );
    }
}
