//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not connected")]
    NotConnected,

    #[error("Already connected")]
    AlreadyConnected,

    #[error("Connection timeout")]
    ConnectTimeout,

    #[error("Connection failed: {0}")]
    ConnectFailed(#[source] io::Error),

    #[error("Read timeout")]
    ReadTimeout,

    #[error("Connection closed by remote")]
    ConnectionClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Check if the error happened while dialing, before a session existed
    pub fn is_connect_failure(&self) -> bool {
        matches!(
            self,
            Self::ConnectTimeout | Self::ConnectFailed(_) | Self::InvalidAddress(_)
        )
    }
}
