//! Scalar normalization: any decoded JSON scalar to a canonical `f64`.

use crate::error::NormalizeError;
use serde_json::{Number, Value};
use std::fmt;

/// The observed kind of a dynamic JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a decoded JSON value into a canonical `f64`.
///
/// Strings are parsed as decimal floating-point literals, numbers are widened.
/// Every other kind is rejected.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use unitypes::normalize;
///
/// assert_eq!(normalize(&json!("123.5")).unwrap(), 123.5);
/// assert_eq!(normalize(&json!(-7)).unwrap(), -7.0);
/// assert!(normalize(&json!(true)).is_err());
/// ```
pub fn normalize(value: &Value) -> Result<f64, NormalizeError> {
    match value {
        Value::String(text) => parse_float(text),
        Value::Number(n) => Ok(widen(n)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            let kind = ValueKind::of(value);
            tracing::trace!(target: "unitypes", %kind, "rejected non-numeric value");
            Err(NormalizeError::UnsupportedType(kind))
        }
    }
}

/// Parses text as a base-10 floating-point literal.
///
/// No whitespace is trimmed. A finite literal too large for `f64` is rejected,
/// while `inf`/`infinity`/`nan` spellings are accepted.
///
/// # Examples
///
/// ```
/// use unitypes::parse_float;
///
/// assert_eq!(parse_float("1.5e3").unwrap(), 1500.0);
/// assert!(parse_float(" 1").is_err());
/// assert!(parse_float("1e400").is_err());
/// ```
pub fn parse_float(text: &str) -> Result<f64, NormalizeError> {
    match text.parse::<f64>() {
        Ok(n) if n.is_infinite() && !names_infinity(text) => {
            tracing::trace!(target: "unitypes", input = text, "numeric string out of range");
            Err(NormalizeError::NotANumber(text.to_string()))
        }
        Ok(n) => Ok(n),
        Err(_) => {
            tracing::trace!(target: "unitypes", input = text, "rejected non-numeric string");
            Err(NormalizeError::NotANumber(text.to_string()))
        }
    }
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn widen(n: &Number) -> f64 {
    if let Some(i) = n.as_i64() {
        i as f64
    } else if let Some(u) = n.as_u64() {
        u as f64
    } else {
        n.as_f64().unwrap_or(f64::NAN)
    }
}
