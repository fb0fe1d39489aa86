//! Logger trait shared by every backend variant and the facade

use super::{error::Result, metadata::MetaValue};
use std::sync::Arc;

/// The logging capability set.
///
/// Metadata is forwarded as the same borrowed slice the caller passed in;
/// implementations must not reorder or drop values. Errors from the
/// underlying output are returned to the caller as-is.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()>;

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()>;

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()>;

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()>;

    /// Alias for [`Logger::info`]
    #[inline]
    fn log(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.info(message, meta)
    }

    /// Alias for [`Logger::debug`]
    #[inline]
    fn verbose(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.debug(message, meta)
    }

    /// Alias for [`Logger::error`]
    #[inline]
    fn fatal(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        self.error(message, meta)
    }

    fn name(&self) -> &str;
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).info(message, meta)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).warn(message, meta)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).error(message, meta)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).debug(message, meta)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).info(message, meta)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).warn(message, meta)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).error(message, meta)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).debug(message, meta)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn info(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).info(message, meta)
    }

    fn warn(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).warn(message, meta)
    }

    fn error(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).error(message, meta)
    }

    fn debug(&self, message: &str, meta: &[&dyn MetaValue]) -> Result<()> {
        (**self).debug(message, meta)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
