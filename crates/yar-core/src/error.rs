//! Error types for the YAR codec

use thiserror::Error;

/// Result type alias for codec operations
pub type YarResult<T> = Result<T, YarError>;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum YarError {
    /// Underlying stream fault, passed through untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The message value has no JSON representation
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The body bytes are not a valid message for the requested type
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Request body decoded without a `p` member
    #[error("request body missing params")]
    MissingParams,

    /// Packager tag names an encoding this codec cannot decode
    #[error("unsupported packager: {0:?}")]
    UnsupportedPackager(String),

    /// Header magic number is not 0x80DFEC60
    #[error("invalid magic number: 0x{0:08X}")]
    InvalidMagic(u32),

    /// Header carries a protocol version this codec does not speak
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u16),

    /// Declared body exceeds the configured limit
    #[error("body too large: {len} bytes (max {max})")]
    BodyTooLarge { len: u32, max: u32 },

    /// Structurally invalid envelope
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl YarError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            YarError::Io(_) => 1,
            YarError::Serialization(_) => 2,
            YarError::Deserialization(_) => 3,
            YarError::MissingParams => 4,
            YarError::UnsupportedPackager(_) => 5,
            YarError::InvalidMagic(_) => 6,
            YarError::UnsupportedVersion(_) => 7,
            YarError::BodyTooLarge { .. } => 8,
            YarError::InvalidFormat(_) => 9,
            YarError::ConfigError(_) => 10,
        }
    }

    /// True for stream faults (including a stream that closed early)
    pub fn is_io(&self) -> bool {
        matches!(self, YarError::Io(_))
    }

    /// Borrow the underlying I/O error, if this is a stream fault
    pub fn as_io(&self) -> Option<&std::io::Error> {
        match self {
            YarError::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
