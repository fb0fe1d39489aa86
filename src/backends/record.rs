//! Record writer: the structured library behind [`StructuredLogger`]
//!
//! Calls take a record first and the message second. The built-in
//! [`JsonRecordWriter`] emits one JSON object per line:
//!
//! ```text
//! {"level":30,"meta":["a",1],"msg":"User logged in","pid":4242,"time":1736332245123}
//! ```
//!
//! With the pretty transport the same entry is printed as
//!
//! ```text
//! [10:30:45 +0000] INFO: User logged in
//!     meta: ["a",1]
//! ```
//!
//! [`StructuredLogger`]: crate::loggers::StructuredLogger

use crate::core::{
    metadata::{meta_list_to_json, render_debug}, LogLevel, MetaValue, Result, TimestampFormat,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;

/// Structured record attached to every call: `{ meta: [...] }`
#[derive(Clone, Copy)]
pub struct Record<'a> {
    pub meta: &'a [&'a dyn MetaValue],
}

impl<'a> Record<'a> {
    pub fn new(meta: &'a [&'a dyn MetaValue]) -> Self {
        Self { meta }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("meta".to_string(), meta_list_to_json(self.meta));
        serde_json::Value::Object(object)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are rendered one at a time so each is bounded
        f.write_str("{ meta: [")?;
        for (i, value) in self.meta.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&render_debug(*value))?;
        }
        f.write_str("] }")
    }
}

/// Pretty-print transport options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyTransport {
    pub colorize: bool,
    pub time_format: TimestampFormat,
}

impl Default for PrettyTransport {
    fn default() -> Self {
        Self {
            colorize: true,
            time_format: TimestampFormat::clock(),
        }
    }
}

/// Configuration handed to a record writer factory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordWriterConfig {
    pub level: LogLevel,
    /// `None` writes raw JSON lines
    pub transport: Option<PrettyTransport>,
}

impl RecordWriterConfig {
    pub fn new(level: LogLevel, pretty_print: bool) -> Self {
        Self {
            level,
            transport: pretty_print.then(PrettyTransport::default),
        }
    }
}

/// Record-then-message writer
pub trait RecordWriter: Send + Sync {
    fn write(&self, level: LogLevel, record: &Record<'_>, message: &str) -> Result<()>;

    #[inline]
    fn info(&self, record: &Record<'_>, message: &str) -> Result<()> {
        self.write(LogLevel::Info, record, message)
    }

    #[inline]
    fn warn(&self, record: &Record<'_>, message: &str) -> Result<()> {
        self.write(LogLevel::Warn, record, message)
    }

    #[inline]
    fn error(&self, record: &Record<'_>, message: &str) -> Result<()> {
        self.write(LogLevel::Error, record, message)
    }

    #[inline]
    fn debug(&self, record: &Record<'_>, message: &str) -> Result<()> {
        self.write(LogLevel::Debug, record, message)
    }
}

/// Numeric level written in the `level` field
pub fn numeric_level(level: LogLevel) -> u8 {
    match level {
        LogLevel::Debug => 20,
        LogLevel::Info => 30,
        LogLevel::Warn => 40,
        LogLevel::Error => 50,
    }
}

/// Built-in JSON record writer
pub struct JsonRecordWriter {
    config: RecordWriterConfig,
    output: Mutex<Box<dyn Write + Send>>,
}

impl JsonRecordWriter {
    /// Writer targeting stdout
    pub fn new(config: RecordWriterConfig) -> Self {
        Self::with_output(config, Box::new(std::io::stdout()))
    }

    pub fn with_output(config: RecordWriterConfig, output: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            output: Mutex::new(output),
        }
    }

    pub fn config(&self) -> &RecordWriterConfig {
        &self.config
    }

    fn format_json(&self, level: LogLevel, record: &Record<'_>, message: &str) -> Result<String> {
        let mut object = serde_json::Map::new();
        object.insert("level".to_string(), numeric_level(level).into());
        object.insert(
            "time".to_string(),
            TimestampFormat::UnixMillis.json_value(&Utc::now()),
        );
        object.insert("pid".to_string(), std::process::id().into());
        if let serde_json::Value::Object(fields) = record.to_json() {
            object.extend(fields);
        }
        object.insert("msg".to_string(), message.into());

        Ok(serde_json::to_string(&serde_json::Value::Object(object))?)
    }

    fn format_pretty(
        &self,
        transport: &PrettyTransport,
        level: LogLevel,
        record: &Record<'_>,
        message: &str,
    ) -> Result<String> {
        let level_str = super::paint(level, level.to_str(), transport.colorize);
        let mut line = format!("[{}] {}: {}", transport.time_format.now(), level_str, message);

        if let serde_json::Value::Object(fields) = record.to_json() {
            for (key, value) in fields {
                line.push_str(&format!("\n    {}: {}", key, serde_json::to_string(&value)?));
            }
        }
        Ok(line)
    }
}

impl RecordWriter for JsonRecordWriter {
    fn write(&self, level: LogLevel, record: &Record<'_>, message: &str) -> Result<()> {
        if !self.config.level.allows(level) {
            return Ok(());
        }

        let line = match &self.config.transport {
            Some(transport) => self.format_pretty(transport, level, record, message)?,
            None => self.format_json(level, record, message)?,
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
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn writer(level: LogLevel, pretty: bool) -> (JsonRecordWriter, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let mut config = RecordWriterConfig::new(level, pretty);
        if let Some(transport) = config.transport.as_mut() {
            transport.colorize = false;
        }
        (
            JsonRecordWriter::with_output(config, Box::new(buffer.clone())),
            buffer,
        )
    }

    #[test]
    fn test_json_line_shape() {
        let (writer, buffer) = writer(LogLevel::Info, false);
        let meta: [&dyn MetaValue; 2] = [&"a", &1];
        writer.info(&Record::new(&meta), "User logged in").unwrap();

        let content = buffer.contents();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed["level"], 30);
        assert_eq!(parsed["msg"], "User logged in");
        assert_eq!(parsed["meta"], serde_json::json!(["a", 1]));
        assert!(parsed["time"].is_i64());
        assert!(parsed["pid"].is_u64());
    }

    #[test]
    fn test_level_filtering() {
        let (writer, buffer) = writer(LogLevel::Warn, false);
        let record = Record::new(&[]);
        writer.debug(&record, "hidden").unwrap();
        writer.info(&record, "hidden").unwrap();
        writer.warn(&record, "shown").unwrap();
        writer.error(&record, "shown").unwrap();

        let content = buffer.contents();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("hidden"));
    }

    #[test]
    fn test_pretty_transport() {
        let (writer, buffer) = writer(LogLevel::Debug, true);
        let meta: [&dyn MetaValue; 1] = [&"x"];
        writer.warn(&Record::new(&meta), "High memory usage").unwrap();

        let content = buffer.contents();
        assert!(content.contains("] WARN: High memory usage"));
        assert!(content.contains("\n    meta: [\"x\"]"));
    }

    #[test]
    fn test_record_debug_form() {
        let meta: [&dyn MetaValue; 2] = [&1, &"two"];
        assert_eq!(format!("{:?}", Record::new(&meta)), "{ meta: [1, \"two\"] }");
    }

    #[test]
    fn test_numeric_levels() {
        assert_eq!(numeric_level(LogLevel::Debug), 20);
        assert_eq!(numeric_level(LogLevel::Error), 50);
    }
}
