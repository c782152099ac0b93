use crate::scalar::ValueKind;
use thiserror::Error;

/// Failure to turn a dynamic JSON value into a canonical `f64`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("string is not representing a number: {0:?}")]
    NotANumber(String),

    #[error("unsupported type of number: {0}")]
    UnsupportedType(ValueKind),
}

/// Failure to decode raw JSON bytes into one of the numeric wrappers.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("string is not representing a number: {0:?}")]
    NotANumber(String),

    #[error("unsupported type of number: {0}")]
    UnsupportedType(ValueKind),
}

impl From<NormalizeError> for DecodeError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::NotANumber(text) => DecodeError::NotANumber(text),
            NormalizeError::UnsupportedType(kind) => DecodeError::UnsupportedType(kind),
        }
    }
}
