//! Property tests over quoted and bare numeric input.

use proptest::prelude::*;
use unitypes::{DecodeError, Float32, Float64, Int, Int16, Int32, Int64, Int8, LenientNumber};

proptest! {
    #[test]
    fn quoted_and_bare_integers_agree(n in -(1i64 << 53)..(1i64 << 53)) {
        let bare = n.to_string();
        let quoted = format!("\"{}\"", n);
        prop_assert_eq!(Int64::decode(bare.as_bytes()).unwrap(), Int64(n));
        prop_assert_eq!(Int64::decode(quoted.as_bytes()).unwrap(), Int64(n));
        prop_assert_eq!(
            Int8::decode(bare.as_bytes()).unwrap(),
            Int8::decode(quoted.as_bytes()).unwrap()
        );
        prop_assert_eq!(
            Float64::decode(bare.as_bytes()).unwrap(),
            Float64::decode(quoted.as_bytes()).unwrap()
        );
    }

    #[test]
    fn quoted_floats_truncate(x in -1e15f64..1e15f64) {
        let quoted = format!("\"{}\"", x);
        prop_assert_eq!(Int::decode(quoted.as_bytes()).unwrap(), Int(x.trunc() as i64));
        prop_assert_eq!(Int32::decode(quoted.as_bytes()).unwrap(), Int32(x as i32));
        prop_assert_eq!(Int16::decode(quoted.as_bytes()).unwrap(), Int16(x as i16));
        prop_assert_eq!(Float32::decode(quoted.as_bytes()).unwrap(), Float32(x as f32));
        prop_assert_eq!(Float64::decode(quoted.as_bytes()).unwrap(), Float64(x));
    }

    #[test]
    fn integer_round_trip_is_stable(n in any::<i32>()) {
        let first: Int32 = serde_json::from_str(&n.to_string()).unwrap();
        let encoded = serde_json::to_string(&first).unwrap();
        let second: Int32 = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(first, Int32(n));
        prop_assert_eq!(second, first);
    }

    #[test]
    fn alphabetic_strings_are_rejected(s in "[a-hj-mo-z]{1,12}") {
        let quoted = format!("\"{}\"", s);
        let is_nan = matches!(Int::decode(quoted.as_bytes()), Err(DecodeError::NotANumber(t)) if t == s);
        prop_assert!(is_nan);
        prop_assert!(Float32::decode(quoted.as_bytes()).is_err());
    }
}
