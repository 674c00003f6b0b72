//! Error types for pjlink-core

/// Result type alias for pjlink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Greeting did not open with the PJLINK magic
    #[error("Unexpected greeting: expected \"PJLINK\", got \"{got}\"")]
    UnexpectedGreeting { got: String },

    /// Device speaks a protocol class other than 1
    #[error("Unsupported protocol class: expected \"1\", got \"{got}\"")]
    UnsupportedClass { got: String },

    /// Reply token is too short to carry class, command and code
    #[error("Reply too short: expected at least {min} bytes, got {actual} bytes")]
    ReplyTooShort { min: usize, actual: usize },

    /// Reply token cannot be split at the fixed field offsets
    #[error("Malformed reply token: {token:?}")]
    MalformedReply { token: String },

    /// Invalid session state
    #[error("Invalid session state: {0}")]
    InvalidSessionState(String),
}

impl Error {
    /// Check if the error came from greeting verification
    pub fn is_handshake(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedGreeting { .. } | Self::UnsupportedClass { .. }
        )
    }

    /// Check if the error came from reply parsing
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Self::ReplyTooShort { .. } | Self::MalformedReply { .. }
        )
    }
}
