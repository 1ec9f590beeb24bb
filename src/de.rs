//! # Field decoding
//!
//! The decode side of the tri-state contract, in two flavors: a raw-bytes hook
//! for record codecs that hand each field's encoded region around as bytes, and
//! a [`serde::Deserialize`] impl for records that go through serde.
//!
//! Either way the transition table is the same. The hook only runs when the key
//! occupied a slot in the input — being invoked at all proves the field was
//! defined, so decoding never produces [`TriState::Absent`]. The null literal
//! is recognized before any `T` decoding is attempted, and anything else either
//! decodes as `T` or fails the field.
//!
//! # Example
//!
//! ```
//! use tristate::prelude::*;
//!
//! let null: TriState<String> = decode_field("x", b"null").unwrap();
//! assert!(null.is_null());
//!
//! // a blank string is a value, not a null
//! let blank: TriState<String> = decode_field("x", br#""""#).unwrap();
//! assert_eq!(blank, TriState::from_value(String::new()));
//! ```

use crate::{errors::DecodeError, TriState};
use failure::Error;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};

/// The JSON null literal. A field region equal to these four bytes verbatim is
/// an explicit null and is never handed to the `T` decoder.
pub const NULL_LITERAL: &[u8] = b"null";

/// Decodes the raw bytes of one record field into a [`TriState`].
///
/// This is the hook a record-level decoder calls once per field occurrence with
/// the field's encoded region. A key that never occurred gets no call; the
/// record decoder leaves that field at its `Absent` default instead.
///
/// # Arguments
///
/// * `field: &str` - The name of the field being decoded, used to tag errors.
/// * `raw: &[u8]` - The encoded region of the field's value.
///
/// # Example
///
/// ```
/// use tristate::prelude::*;
///
/// let dec: TriState<String> = decode_field("x", br#""foo""#).unwrap();
///
/// assert_eq!(dec, TriState::from_value("foo".to_string()));
/// ```
pub fn decode_field<T: DeserializeOwned>(field: &str, raw: &[u8]) -> Result<TriState<T>, Error> {
    if raw == NULL_LITERAL {
        return Ok(TriState::Null);
    }

    match serde_json::from_slice(raw) {
        Ok(v) => Ok(TriState::Value(v)),
        Err(e) => Err(DecodeError::new(field, &e.to_string()).into()),
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for TriState<T> {
    /// Only invoked when the key was present, so the result is never `Absent`.
    /// Going through `Option` lets the format's own null detection run before
    /// generic `T` decoding; a `T` parse failure propagates to the record
    /// decoder untouched.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(TriState::from_option(Option::deserialize(deserializer)?))
    }
}
