//! Parser error
//!
//! Carries the byte offset of the first token the parser could not accept.

use thiserror::Error;

/// Malformed record text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at pos {position}")]
pub struct SyntaxError {
    /// Byte offset into the input line
    pub position: usize,

    /// What the parser expected to find there
    pub message: String,
}

impl SyntaxError {
    pub(crate) fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}
