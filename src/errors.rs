use std::{error::Error, fmt};

#[derive(Debug, Clone)]
/// An error encountered when the bytes of a present, non-null field fail to
/// decode as the payload type.
///
/// Always tagged with the field identity so the caller can locate the failure;
/// the decoder never swallows it or substitutes a default.
pub struct DecodeError {
    /// Name of the field whose contents could not be decoded.
    pub field: String,
    /// Description of the underlying parse failure.
    pub reason: String,
}

impl DecodeError {
    /// Creates a new `DecodeError`
    ///
    /// # Arguments
    ///
    /// * `field: &str` - The name of the field that failed to decode.
    /// * `reason: &str` - The message associated with the error.
    pub fn new(field: &str, reason: &str) -> Self {
        DecodeError {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "couldn't decode field `{field}`: {reason}",
            field = self.field,
            reason = self.reason,
        )
    }
}
