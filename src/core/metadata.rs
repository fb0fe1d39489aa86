//! Opaque metadata values carried alongside log messages
//!
//! Metadata is passed as a borrowed slice `&[&dyn MetaValue]`. Loggers hand the
//! same slice to their backend untouched; only backends look inside values,
//! through the helpers in this module.

use std::any::Any;
use std::fmt::{self, Write};

/// Longest `Debug` rendering kept for one metadata value, in bytes
pub const MAX_RENDERED_LEN: usize = 4096;

/// Appended to a rendering cut at [`MAX_RENDERED_LEN`]
pub const TRUNCATION_MARKER: &str = "...<truncated>";

/// Any value that can ride along with a log message.
///
/// Implemented for every `Debug + 'static` type, so callers never implement it
/// by hand: `logger.info("saved", &[&user_id, &path, &bytes])`.
pub trait MetaValue: fmt::Debug + Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: fmt::Debug + Any> MetaValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `fmt::Write` sink that refuses output past its limit.
///
/// The refusal surfaces as `fmt::Error` inside the value's `Debug` impl,
/// which stops a self-referential value from recursing without bound.
struct BoundedWriter {
    buf: String,
    limit: usize,
    truncated: bool,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }
        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        self.truncated = true;
        Err(fmt::Error)
    }
}

/// `Debug` rendering of `value`, cut at [`MAX_RENDERED_LEN`] bytes
pub fn render_debug<T: fmt::Debug + ?Sized>(value: &T) -> String {
    let mut out = BoundedWriter {
        buf: String::new(),
        limit: MAX_RENDERED_LEN,
        truncated: false,
    };
    // A failing Debug impl leaves whatever it wrote so far
    let _ = write!(out, "{:?}", value);
    if out.truncated {
        out.buf.push_str(TRUNCATION_MARKER);
    }
    out.buf
}

/// Display form used by console sinks: strings print raw, everything else
/// through `Debug`.
pub fn display_meta(value: &dyn MetaValue) -> String {
    let any = value.as_any();
    if let Some(s) = any.downcast_ref::<&'static str>() {
        return (*s).to_string();
    }
    if let Some(s) = any.downcast_ref::<String>() {
        return s.clone();
    }
    render_debug(value)
}

/// JSON form used by the structured writers.
///
/// Known scalar and JSON types convert natively; anything else becomes its
/// `Debug` rendering as a JSON string.
pub fn meta_to_json(value: &dyn MetaValue) -> serde_json::Value {
    use serde_json::Value;

    let any = value.as_any();
    if let Some(v) = any.downcast_ref::<Value>() {
        return v.clone();
    }
    if let Some(s) = any.downcast_ref::<&'static str>() {
        return Value::String((*s).to_string());
    }
    if let Some(s) = any.downcast_ref::<String>() {
        return Value::String(s.clone());
    }
    if let Some(b) = any.downcast_ref::<bool>() {
        return Value::Bool(*b);
    }
    if any.is::<()>() {
        return Value::Null;
    }
    if let Some(n) = integer_to_json(any) {
        return n;
    }
    if let Some(n) = any.downcast_ref::<f64>() {
        return float_to_json(*n);
    }
    if let Some(n) = any.downcast_ref::<f32>() {
        return float_to_json(f64::from(*n));
    }
    Value::String(render_debug(value))
}

fn integer_to_json(any: &dyn Any) -> Option<serde_json::Value> {
    macro_rules! try_int {
        ($($ty:ty),*) => {
            $(
                if let Some(n) = any.downcast_ref::<$ty>() {
                    return Some(serde_json::Value::from(*n));
                }
            )*
        };
    }
    try_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

    // Beyond 64 bits serde_json has no native number; keep the digits
    if let Some(n) = any.downcast_ref::<i128>() {
        return Some(i64::try_from(*n).map_or_else(|_| n.to_string().into(), Into::into));
    }
    if let Some(n) = any.downcast_ref::<u128>() {
        return Some(u64::try_from(*n).map_or_else(|_| n.to_string().into(), Into::into));
    }
    None
}

/// Non-finite floats have no JSON form and become null
fn float_to_json(n: f64) -> serde_json::Value {
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// Convert a metadata slice to a JSON array, preserving order
pub fn meta_list_to_json(meta: &[&dyn MetaValue]) -> serde_json::Value {
    serde_json::Value::Array(meta.iter().map(|value| meta_to_json(*value)).collect())
}
