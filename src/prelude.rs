pub use crate::{
    de::{decode_field, NULL_LITERAL},
    errors::DecodeError,
    ser::encode_field,
    TriState,
};
pub use bytes::Bytes;
