//! The lenient numeric wrapper types.
//!
//! Each wrapper deserializes from a JSON number or from a string holding a
//! decimal literal, and serializes back as a bare number.

use crate::decode::LenientNumber;
use crate::error::NormalizeError;
use crate::narrow::Narrow;
use crate::scalar::parse_float;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

macro_rules! lenient_number {
    ($(#[$attr:meta])* $name:ident($repr:ty)) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name(pub $repr);

        impl $name {
            pub fn get(self) -> $repr {
                self.0
            }
        }

        impl LenientNumber for $name {
            type Repr = $repr;

            #[inline]
            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }

            #[inline]
            fn into_repr(self) -> $repr {
                self.0
            }
        }

        impl From<$repr> for $name {
            fn from(repr: $repr) -> Self {
                $name(repr)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Deref for $name {
            type Target = $repr;

            fn deref(&self) -> &$repr {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = NormalizeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_float(s).map(|canonical| $name(<$repr as Narrow>::narrow(canonical)))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = Value::deserialize(deserializer)?;
                Self::decode_value(&value).map_err(de::Error::custom)
            }
        }
    };
}

lenient_number! {
    /// Platform-independent 64-bit signed integer.
    #[derive(Eq, Ord, Hash)]
    Int(i64)
}

lenient_number! {
    #[derive(Eq, Ord, Hash)]
    Int8(i8)
}

lenient_number! {
    #[derive(Eq, Ord, Hash)]
    Int16(i16)
}

lenient_number! {
    #[derive(Eq, Ord, Hash)]
    Int32(i32)
}

lenient_number! {
    #[derive(Eq, Ord, Hash)]
    Int64(i64)
}

lenient_number! {
    Float32(f32)
}

lenient_number! {
    Float64(f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("123.999".parse::<Int>().unwrap(), Int(123));
        assert_eq!("-5.5".parse::<Int16>().unwrap(), Int16(-5));
        assert_eq!("300".parse::<Int8>().unwrap(), Int8(127));
        assert_eq!("0.1".parse::<Float64>().unwrap(), Float64(0.1));
        assert_eq!(
            "twelve".parse::<Int32>(),
            Err(NormalizeError::NotANumber("twelve".to_string()))
        );
    }

    #[test]
    fn test_display_matches_primitive() {
        assert_eq!(Int32(-17).to_string(), "-17");
        assert_eq!(Float32(1.5).to_string(), "1.5");
        assert_eq!(Float64(0.1).to_string(), "0.1");
    }

    #[test]
    fn test_conversions() {
        let n: Int64 = 9_000_000_000_i64.into();
        assert_eq!(*n, 9_000_000_000);
        assert_eq!(i64::from(n), 9_000_000_000);
        assert_eq!(n.get(), n.into_repr());
        assert_eq!(Int8::default(), Int8(0));
        assert_eq!(Float32::default(), Float32(0.0));
    }

    #[test]
    fn test_ordering() {
        assert!(Int16(-1) < Int16(1));
        assert!(Float64(0.5) > Float64(0.25));
        let mut values = vec![Int(3), Int(-2), Int(10)];
        values.sort();
        assert_eq!(values, vec![Int(-2), Int(3), Int(10)]);
    }

    #[test]
    fn test_float64_keeps_double_precision() {
        let n = Float64::from_canonical(0.1);
        assert_eq!(n.0, 0.1_f64);
        assert_ne!(n.0, 0.1_f32 as f64);
    }
}
