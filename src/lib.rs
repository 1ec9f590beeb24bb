//! # Tristate
//!
//! A tri-state scalar for JSON interchange.
//!
//! A conventional nullable type has two states, which means it collapses two
//! situations a partial-update (PATCH) endpoint badly needs to tell apart: a key
//! that never appeared in the input, and a key that appeared with an explicit
//! `null`. [`TriState`] keeps all three states separate, so a handler can tell
//! "don't touch this field" from "clear this field" from "set this field to X".
//!
//! | state     | example input | meaning                                 |
//! | ---       | ---           | ---                                     |
//! | `Absent`  | `{}`          | key not present in the input            |
//! | `Null`    | `{"x":null}`  | key present, value explicitly null      |
//! | `Value`   | `{"x":""}`    | key present with a concrete value       |
//!
//! Note the last row: a blank string is a *value*. It is never coerced to null,
//! because blank-but-present and explicit-null are different instructions.
//!
//! # Usage
//!
//! [`TriState`] implements [`serde::Serialize`] and [`serde::Deserialize`], so
//! it drops into a record as a field. Mark the field `default` (so a missing
//! key leaves it `Absent`) and, if you want absent fields dropped from output,
//! `skip_serializing_if` with [`TriState::is_zero`]:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tristate::TriState;
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "TriState::is_zero")]
//!     name: TriState<String>,
//! }
//!
//! // the key never appeared, so leave the name alone
//! let untouched: Patch = serde_json::from_str("{}").unwrap();
//! assert!(untouched.name.is_absent());
//!
//! // the key appeared as `null`, so clear the name
//! let cleared: Patch = serde_json::from_str(r#"{"name":null}"#).unwrap();
//! assert!(cleared.name.is_null());
//!
//! // the key appeared with a (blank!) value, so set the name to it
//! let set: Patch = serde_json::from_str(r#"{"name":""}"#).unwrap();
//! assert_eq!(set.name.value_or_zero(), "");
//! ```
//!
//! # The three-state contract
//!
//! Decoding: the field's deserialize hook only runs when the key occupied a
//! slot in the input, so decoding never produces `Absent` — absence is the
//! record deserializer's business, handled by the `default` attribute. When the
//! hook does run, the null literal is recognized before any `T` decoding is
//! attempted; anything else is decoded as `T`, and a parse failure fails the
//! field rather than falling back to null.
//!
//! Encoding: `Value` encodes as the value, and *both* `Null` and `Absent`
//! encode as the null literal. The scalar never decides to omit itself; that
//! decision belongs to the record serializer, which should ask
//! [`TriState::is_zero`] — true exactly for `Absent`. Handing the serializer a
//! broader predicate (anything that is also true for `Null` or for a blank
//! value) silently turns "clear this field" into "don't touch this field".
//!
//! The raw-bytes hooks [`decode_field`](de::decode_field) and
//! [`encode_field`](ser::encode_field) expose the same contract to record
//! codecs that hand fields around as byte regions instead of going through
//! serde's visitor machinery.

#![warn(
//    missing_docs,
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_doc_code_examples,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]

pub mod de;
pub mod errors;
pub mod prelude;
pub mod ser;

use std::fmt;
use TriState::*;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
/// A scalar field value that remembers whether its key appeared in the input.
///
/// The fourth combination a boolean-pair representation would allow
/// (undefined-but-valid) does not exist here: there is no variant for it.
///
/// # Example
///
/// ```
/// use tristate::TriState;
///
/// let name = TriState::from_value("voi".to_string());
///
/// let val = match name {
///     TriState::Value(s) => s,
///     _ => panic!(),
/// };
///
/// assert_eq!(val, "voi");
/// ```
pub enum TriState<T> {
    /// The field's key did not occur in the input.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// let absent: TriState<String> = TriState::Absent;
    /// ```
    Absent,
    /// The field's key occurred with an explicit null.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// let null: TriState<String> = TriState::Null;
    /// ```
    Null,
    /// The field's key occurred with a concrete value, possibly the zero value.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// let blank = TriState::Value(String::new());
    /// ```
    Value(T),
}

impl<T> TriState<T> {
    /// Wraps a concrete value. Use this when the caller always has a value and
    /// never wants null or absent semantics.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert!(TriState::from_value(1u8).is_present());
    /// ```
    pub fn from_value(value: T) -> TriState<T> { Value(value) }

    /// Converts an [`Option`], mapping `None` to `Null` — **not** to `Absent`.
    /// A caller who explicitly supplied "no value" meant a deliberate null,
    /// which is a different thing from a field that was never mentioned.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// let n: TriState<u8> = TriState::from_option(None);
    ///
    /// assert!(n.is_null());
    /// assert!(!n.is_absent());
    /// ```
    pub fn from_option(value: Option<T>) -> TriState<T> {
        match value {
            Some(v) => Value(v),
            None => Null,
        }
    }

    /// General constructor: the result is always defined, holding `value` when
    /// `valid` and dropping it for `Null` otherwise. There is deliberately no
    /// constructor that produces `Absent` alongside a payload — `Absent` is
    /// reached only through [`Default`] or a record decode that never saw the
    /// key.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert!(TriState::new(1u8, true).is_present());
    /// assert!(TriState::new(1u8, false).is_null());
    /// ```
    pub fn new(value: T, valid: bool) -> TriState<T> {
        if valid {
            Value(value)
        } else {
            Null
        }
    }

    /// Indicates whether the key occurred at all, null or not.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert!(TriState::Null::<u8>.is_defined());
    /// assert!(!TriState::Absent::<u8>.is_defined());
    /// ```
    pub fn is_defined(&self) -> bool { !self.is_absent() }

    /// Indicates whether the value is `Absent`.
    pub fn is_absent(&self) -> bool {
        match self {
            Absent => true,
            _ => false,
        }
    }

    /// Indicates whether the value is `Null`.
    pub fn is_null(&self) -> bool {
        match self {
            Null => true,
            _ => false,
        }
    }

    /// Indicates whether the value holds a concrete `T`.
    pub fn is_present(&self) -> bool {
        match self {
            Value(_) => true,
            _ => false,
        }
    }

    /// The omit-on-zero predicate: true exactly for `Absent`.
    ///
    /// This is the function to hand to a record serializer that supports
    /// omitting fields, e.g. `#[serde(skip_serializing_if = "TriState::is_zero")]`.
    /// It is *not* a generic emptiness test — it is false for `Null` and false
    /// for a blank value, both of which must survive into the output.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert!(TriState::Absent::<String>.is_zero());
    /// assert!(!TriState::Null::<String>.is_zero());
    /// assert!(!TriState::from_value(String::new()).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool { self.is_absent() }

    /// Borrows the inner value, if one is present.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert_eq!(TriState::from_value(1u8).as_option(), Some(&1));
    /// assert_eq!(TriState::Null::<u8>.as_option(), None);
    /// ```
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the value, converting it into an [`Option`]. Both `Null` and
    /// `Absent` become `None`; the distinction between them is lost, so only do
    /// this once you no longer care about it.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert_eq!(TriState::from_value(1u8).into_option(), Some(1));
    /// ```
    pub fn into_option(self) -> Option<T> {
        match self {
            Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a copy of the inner value if one is present, otherwise the zero
    /// value of `T`. Never fails; the zero value returned for `Null` and
    /// `Absent` is a safe placeholder, not data.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// assert_eq!(TriState::from_value(5u8).value_or_zero(), 5);
    /// assert_eq!(TriState::Null::<u8>.value_or_zero(), 0);
    /// ```
    pub fn value_or_zero(&self) -> T
    where
        T: Clone + Default,
    {
        match self {
            Value(v) => v.clone(),
            _ => T::default(),
        }
    }

    /// Consumes the value, returning the inner value if present and the zero
    /// value of `T` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// let s = TriState::from_value("hello".to_string());
    ///
    /// assert_eq!(s.into_value_or_zero(), "hello");
    /// ```
    pub fn into_value_or_zero(self) -> T
    where
        T: Default,
    {
        match self {
            Value(v) => v,
            _ => T::default(),
        }
    }
}

/// The default is `Absent`: a freshly zeroed record field has not seen its key.
impl<T> Default for TriState<T> {
    fn default() -> TriState<T> { Absent }
}

impl<T> From<T> for TriState<T> {
    fn from(value: T) -> TriState<T> { Value(value) }
}

impl<T> From<Option<T>> for TriState<T> {
    fn from(value: Option<T>) -> TriState<T> { TriState::from_option(value) }
}

impl<T: fmt::Display> fmt::Display for TriState<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Absent => write!(f, "ABSENT"),
            Null => write!(f, "NULL"),
            Value(v) => v.fmt(f),
        }
    }
}
