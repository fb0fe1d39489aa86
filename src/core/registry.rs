//! Backend registry
//!
//! Loggers acquire their writer libraries here at construction time. A
//! library that is not registered, or whose factory fails, is unavailable and
//! the requesting logger falls back to a console writer.

use super::{
    console::{Console, StdConsole},
    error::{LoggerError, Result},
};
use crate::backends::{LineWriter, LineWriterConfig, RecordWriter, RecordWriterConfig};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Factory creating a record writer from its configuration
pub type RecordWriterFactory =
    Arc<dyn Fn(&RecordWriterConfig) -> Result<Box<dyn RecordWriter>> + Send + Sync>;

/// Factory creating a line writer from its configuration
pub type LineWriterFactory =
    Arc<dyn Fn(&LineWriterConfig) -> Result<Box<dyn LineWriter>> + Send + Sync>;

/// Library name of the record writer backend
pub const RECORD_BACKEND: &str = "record";

/// Library name of the line writer backend
pub const LINE_BACKEND: &str = "line";

#[derive(Clone, Default)]
struct Registered {
    record: Option<RecordWriterFactory>,
    line: Option<LineWriterFactory>,
}

/// Provide the backends compiled into this build.
fn default_backends() -> Registered {
    #[allow(unused_mut)]
    let mut registered = Registered::default();

    #[cfg(feature = "structured-backend")]
    {
        use crate::backends::JsonRecordWriter;
        let factory: RecordWriterFactory =
            Arc::new(|config: &RecordWriterConfig| -> Result<Box<dyn RecordWriter>> {
                Ok(Box::new(JsonRecordWriter::new(config.clone())))
            });
        registered.record = Some(factory);
    }

    #[cfg(feature = "formatted-backend")]
    {
        use crate::backends::StreamLineWriter;
        let factory: LineWriterFactory =
            Arc::new(|config: &LineWriterConfig| -> Result<Box<dyn LineWriter>> {
                Ok(Box::new(StreamLineWriter::new(*config)))
            });
        registered.line = Some(factory);
    }

    registered
}

/// Process-wide registry used when no explicit one is supplied
static GLOBAL_REGISTRY: LazyLock<BackendRegistry> = LazyLock::new(BackendRegistry::new);

/// Writer library registry.
///
/// Cloning yields a handle to the same registry.
///
/// # Example
///
/// ```
/// use log_facade::core::BackendRegistry;
///
/// let registry = BackendRegistry::empty();
/// assert!(!registry.has_record_writer());
/// ```
#[derive(Clone)]
pub struct BackendRegistry {
    inner: Arc<RwLock<Registered>>,
}

impl BackendRegistry {
    /// Registry holding the built-in backends enabled by cargo features
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(default_backends())),
        }
    }

    /// Registry with nothing registered: every acquisition fails
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Registered::default())),
        }
    }

    /// Handle to the process-wide registry
    pub fn global() -> Self {
        GLOBAL_REGISTRY.clone()
    }

    /// Register (or replace) the record writer library
    pub fn register_record_writer<F>(&self, factory: F)
    where
        F: Fn(&RecordWriterConfig) -> Result<Box<dyn RecordWriter>> + Send + Sync + 'static,
    {
        self.inner.write().record = Some(Arc::new(factory));
    }

    /// Register (or replace) the line writer library
    pub fn register_line_writer<F>(&self, factory: F)
    where
        F: Fn(&LineWriterConfig) -> Result<Box<dyn LineWriter>> + Send + Sync + 'static,
    {
        self.inner.write().line = Some(Arc::new(factory));
    }

    pub fn unregister_record_writer(&self) {
        self.inner.write().record = None;
    }

    pub fn unregister_line_writer(&self) {
        self.inner.write().line = None;
    }

    /// Restore the built-in backends
    pub fn reset(&self) {
        *self.inner.write() = default_backends();
    }

    pub fn has_record_writer(&self) -> bool {
        self.inner.read().record.is_some()
    }

    pub fn has_line_writer(&self) -> bool {
        self.inner.read().line.is_some()
    }

    /// Acquire a record writer configured with `config`
    pub fn acquire_record_writer(&self, config: &RecordWriterConfig) -> Result<Box<dyn RecordWriter>> {
        // Clone the factory out so it runs without the registry lock held
        let factory = self.inner.read().record.clone();
        match factory {
            Some(factory) => factory(config),
            None => Err(LoggerError::backend_unavailable(
                RECORD_BACKEND,
                "no record writer registered",
            )),
        }
    }

    /// Acquire a line writer configured with `config`
    pub fn acquire_line_writer(&self, config: &LineWriterConfig) -> Result<Box<dyn LineWriter>> {
        let factory = self.inner.read().line.clone();
        match factory {
            Some(factory) => factory(config),
            None => Err(LoggerError::backend_unavailable(
                LINE_BACKEND,
                "no line writer registered",
            )),
        }
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("record", &self.has_record_writer())
            .field("line", &self.has_line_writer())
            .finish()
    }
}

/// What a logger needs from its surroundings: where to find writer libraries
/// and where plain-text output goes.
#[derive(Clone)]
pub struct Environment {
    pub registry: BackendRegistry,
    pub console: Arc<dyn Console>,
}

impl Environment {
    pub fn new(registry: BackendRegistry, console: Arc<dyn Console>) -> Self {
        Self { registry, console }
    }
}

impl Default for Environment {
    /// Global registry and the process console
    fn default() -> Self {
        Self::new(BackendRegistry::global(), StdConsole::shared())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
