//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid request: {0}")]
    Request(#[from] pjlink_types::Error),

    #[error("Protocol error: {0}")]
    Core(#[from] pjlink_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] pjlink_transport::Error),

    #[error("Projector not connected")]
    NotConnected,
}

/// Failure classes for one request
///
/// A device-rejected password is not listed here: that exchange completes
/// and yields the ERRA sentinel response instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request rejected before any I/O
    Validation,

    /// Could not reach the projector
    Connect,

    /// Endpoint is not a PJLink class 1 device, or the session was driven
    /// out of order
    Protocol,

    /// Mid-session I/O failure
    Transport,

    /// Reply could not be parsed
    Format,
}

impl Error {
    /// Classify the failure so callers branch on behavior, not message text
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request(_) => ErrorKind::Validation,
            Self::Core(e) if e.is_format() => ErrorKind::Format,
            Self::Core(_) => ErrorKind::Protocol,
            Self::Transport(e) if e.is_connect_failure() => ErrorKind::Connect,
            Self::Transport(_) => ErrorKind::Transport,
            Self::NotConnected => ErrorKind::Transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_validation() {
        let err = Error::from(pjlink_types::Error::InvalidCommandLength { actual: 3 });
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_kind_protocol_vs_format() {
        let handshake = Error::from(pjlink_core::Error::UnsupportedClass {
            got: "2".to_string(),
        });
        assert_eq!(handshake.kind(), ErrorKind::Protocol);

        let format = Error::from(pjlink_core::Error::ReplyTooShort { min: 7, actual: 2 });
        assert_eq!(format.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_kind_connect_vs_transport() {
        let connect = Error::from(pjlink_transport::Error::ConnectTimeout);
        assert_eq!(connect.kind(), ErrorKind::Connect);

        let transport = Error::from(pjlink_transport::Error::ReadTimeout);
        assert_eq!(transport.kind(), ErrorKind::Transport);
    }
}
