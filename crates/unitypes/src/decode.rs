use crate::error::DecodeError;
use crate::narrow::Narrow;
use crate::scalar::normalize;
use serde_json::Value;

/// A fixed-width number that decodes from either a JSON number or a numeric
/// JSON string.
pub trait LenientNumber: Sized {
    /// The primitive the wrapper stores.
    type Repr: Narrow;

    fn from_repr(repr: Self::Repr) -> Self;

    fn into_repr(self) -> Self::Repr;

    /// Narrows a canonical `f64` into this type.
    fn from_canonical(canonical: f64) -> Self {
        Self::from_repr(Self::Repr::narrow(canonical))
    }

    /// Decodes one JSON scalar from raw bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitypes::{Int8, LenientNumber};
    ///
    /// assert_eq!(Int8::decode(b"\"12.9\"").unwrap(), Int8(12));
    /// assert_eq!(Int8::decode(b"12").unwrap(), Int8(12));
    /// ```
    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        Self::decode_value(&value)
    }

    /// Decodes an already-parsed JSON value.
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        Ok(Self::from_canonical(normalize(value)?))
    }
}

/// Decodes raw JSON bytes into any [`LenientNumber`].
///
/// ```
/// use unitypes::{decode, Float32};
///
/// let n: Float32 = decode(br#""0.25""#).unwrap();
/// assert_eq!(n, Float32(0.25));
/// ```
pub fn decode<T: LenientNumber>(raw: &[u8]) -> Result<T, DecodeError> {
    T::decode(raw)
}
