//! Error types for the TDS thin client.

use std::io;
use std::panic::Location;
use thiserror::Error;

/// Result type alias for TDS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for TDS thin client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error surfaced by the statement executor.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Wire type identifier with no catalog entry.
    #[error("Unsupported TDS data type: {type_id:#04x}")]
    UnsupportedType { type_id: u8 },

    /// Variable-length column declared with the unbounded (max) sentinel.
    #[error("Column '{column}' has an unbounded length; large-object columns are not described here")]
    UnboundedLength { column: String },

    /// Declared length selects no variant of a length-discriminated type.
    #[error("Invalid length {length} for column '{column}' of type {type_id:#04x}")]
    InvalidColumnLength {
        column: String,
        type_id: u8,
        length: u32,
    },

    /// Protocol error.
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} filed at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// Unparseable TDS version tag.
    #[error("Invalid TDS version: {version}")]
    InvalidTdsVersion { version: String },

    /// Operation on a closed cursor.
    #[error("Cursor closed")]
    CursorClosed,

    /// Operation on a closed connection.
    #[error("Connection closed")]
    ConnectionClosed,
}

impl Error {
    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create an invalid version error.
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidTdsVersion {
            version: version.into(),
        }
    }
}
