//! Error types for chubby
//!
//! Provides a unified error type for all operations.
//!
//! The type is `Clone` because a fatal connection error is recorded once
//! by the background reader and then handed out verbatim to every caller
//! that touches the connection afterwards.

use thiserror::Error;

use crate::parser::SyntaxError;

/// Result type alias using ChubbyError
pub type Result<T> = std::result::Result<T, ChubbyError>;

/// Unified error type for chubby operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChubbyError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    // -------------------------------------------------------------------------
    // Wire Format Errors
    // -------------------------------------------------------------------------
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Protocol error: {0}")]
    Protocol(String),

    /// An `ERR <message>` reply. The connection stays usable.
    #[error("Server error: {0}")]
    Server(String),

    #[error("Invalid command argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("Not connected")]
    NotConnected,

    #[error("Already connected")]
    AlreadyConnected,

    #[error("Connection closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Field Mapping Errors
    // -------------------------------------------------------------------------
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Field {field}: expected {expected}, found {found}")]
    FieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChubbyError {
    /// True for `ERR` replies reported by the server
    pub fn is_server_error(&self) -> bool {
        matches!(self, ChubbyError::Server(_))
    }

    /// True for errors that end the connection
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChubbyError::Transport(_) | ChubbyError::Protocol(_) | ChubbyError::Closed
        )
    }
}

impl From<std::io::Error> for ChubbyError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => {
                ChubbyError::Transport("connection closed by server".to_string())
            }
            _ => ChubbyError::Transport(err.to_string()),
        }
    }
}
