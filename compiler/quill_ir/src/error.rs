//! Codec errors.

use thiserror::Error;

/// Error converting a raw value into a character symbol.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum CodecError {
    /// A surrogate half or a value above `0x10FFFF`.
    ///
    /// `index` is the position within the literal body when the error came
    /// from [`decode_body`](crate::decode_body).
    #[error("0x{value:04X} is not a Unicode scalar value ({}){}", kind_of(.value), at_index(.index))]
    InvalidScalar { value: u32, index: Option<usize> },
}

impl CodecError {
    #[cold]
    pub fn invalid_scalar(value: u32) -> Self {
        CodecError::InvalidScalar { value, index: None }
    }

    /// The rejected value.
    pub fn value(&self) -> u32 {
        match *self {
            CodecError::InvalidScalar { value, .. } => value,
        }
    }

    /// Attach the position within a literal body.
    #[must_use]
    pub fn at(self, position: usize) -> Self {
        match self {
            CodecError::InvalidScalar { value, .. } => CodecError::InvalidScalar {
                value,
                index: Some(position),
            },
        }
    }

    pub fn is_surrogate(&self) -> bool {
        (0xD800..=0xDFFF).contains(&self.value())
    }
}

fn kind_of(value: &u32) -> &'static str {
    if (0xD800..=0xDFFF).contains(value) {
        "surrogate half"
    } else {
        "beyond U+10FFFF"
    }
}

fn at_index(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |i| format!(" at body index {i}"))
}
