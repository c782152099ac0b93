//! Lenient fixed-width numeric types for JSON.
//!
//! APIs often send numbers as quoted strings (`"123"`) in some places and as
//! bare numbers (`123`) in others. The wrappers in this crate accept both:
//! every value is first normalized to an `f64` and then narrowed to the
//! wrapper's own width. Integer wrappers truncate toward zero and saturate at
//! their bounds.
//!
//! # Example
//!
//! ```
//! use serde::Deserialize;
//! use unitypes::{Float32, Int, Int8};
//!
//! #[derive(Deserialize)]
//! struct Reading {
//!     id: Int,
//!     level: Int8,
//!     value: Option<Float32>,
//! }
//!
//! let r: Reading = serde_json::from_str(r#"{"id":"42","level":7.9,"value":null}"#).unwrap();
//! assert_eq!(r.id, Int(42));
//! assert_eq!(r.level, Int8(7));
//! assert_eq!(r.value, None);
//!
//! assert_eq!(serde_json::to_string(&r.id).unwrap(), "42");
//! ```

pub mod decode;
pub mod error;
pub mod narrow;
pub mod numbers;
pub mod scalar;

pub use decode::{decode, LenientNumber};
pub use error::{DecodeError, NormalizeError};
pub use narrow::Narrow;
pub use numbers::{Float32, Float64, Int, Int16, Int32, Int64, Int8};
pub use scalar::{normalize, parse_float, ValueKind};
