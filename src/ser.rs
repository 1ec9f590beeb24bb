//! # Field encoding
//!
//! The encode side of the tri-state contract. `Value` encodes as the value's
//! standard JSON encoding; `Null` and `Absent` both encode as the null literal.
//! The scalar itself never decides to be omitted — dropping absent fields from
//! a record is the record serializer's call, made by asking
//! [`TriState::is_zero`] before the hook is ever invoked.
//!
//! # Example
//!
//! ```
//! use tristate::prelude::*;
//!
//! let enc = encode_field(&TriState::from_value("foo".to_string())).unwrap();
//! assert_eq!(&*enc, br#""foo""#);
//!
//! // both non-value states encode as null
//! assert_eq!(&*encode_field(&TriState::<String>::Null).unwrap(), b"null");
//! assert_eq!(&*encode_field(&TriState::<String>::Absent).unwrap(), b"null");
//! ```

use crate::TriState;
use bytes::Bytes;
use failure::Error;
use serde::ser::{Serialize, Serializer};

/// Encodes a [`TriState`] into the bytes for one record field position.
///
/// This only fails if `T`'s own serializer fails; every state of the scalar
/// itself encodes.
///
/// # Arguments
///
/// * `t` - A reference to the [`TriState`] value to be encoded.
///
/// # Example
///
/// ```
/// use tristate::prelude::*;
///
/// let enc = encode_field(&TriState::from_value(25u8)).unwrap();
///
/// assert_eq!(&*enc, b"25");
/// ```
pub fn encode_field<T: Serialize>(t: &TriState<T>) -> Result<Bytes, Error> {
    Ok(Bytes::from(serde_json::to_vec(t)?))
}

impl<T: Serialize> Serialize for TriState<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TriState::Value(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_encode_as_themselves() {
        let enc = encode_field(&TriState::from_value("foo".to_string())).unwrap();
        assert_eq!(&*enc, br#""foo""#);
    }

    #[test]
    fn blank_encodes_as_blank() {
        let enc = encode_field(&TriState::from_value(String::new())).unwrap();
        assert_eq!(&*enc, br#""""#);
    }

    #[test]
    fn null_and_absent_encode_as_null() {
        assert_eq!(&*encode_field(&TriState::<String>::Null).unwrap(), b"null");
        assert_eq!(
            &*encode_field(&TriState::<String>::Absent).unwrap(),
            b"null"
        );
    }

    #[test]
    fn field_round_trip() {
        use crate::de::decode_field;

        let orig = TriState::from_value("hello world".to_string());
        let enc = encode_field(&orig).unwrap();
        let dec: TriState<String> = decode_field("x", &enc).unwrap();

        assert_eq!(dec, orig);
    }
}
