//! Request structure for a single projector exchange

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of a PJLink command mnemonic in bytes
pub const COMMAND_LEN: usize = 4;

/// One projector command request
///
/// Carries everything needed for a single exchange: where the projector
/// lives, how to authenticate, and the command to deliver. Built once per
/// call and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PjRequest {
    /// Projector IP address or hostname
    pub address: String,

    /// TCP port (PJLink default: 4352)
    pub port: u16,

    /// Protocol class digit ("1")
    pub class: String,

    /// Authentication password (may be empty)
    pub password: String,

    /// Four-character command mnemonic, e.g. "POWR"
    pub command: String,

    /// Command parameter, e.g. "?" for queries
    pub param: String,
}

impl PjRequest {
    /// Check the request before any network I/O
    ///
    /// PJLink command mnemonics are exactly four characters; anything else
    /// is rejected here so a bad request never opens a socket.
    pub fn validate(&self) -> Result<()> {
        if self.command.len() != COMMAND_LEN {
            return Err(Error::InvalidCommandLength {
                actual: self.command.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PjRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}:{}",
            self.command, self.param, self.address, self.port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(command: &str) -> PjRequest {
        PjRequest {
            address: "10.1.1.3".to_string(),
            port: 4352,
            class: "1".to_string(),
            password: "magic123".to_string(),
            command: command.to_string(),
            param: "?".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_four_chars() {
        assert!(request("POWR").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_command() {
        let err = request("POW").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidCommandLength { actual: 3 }));
    }

    #[test]
    fn test_validate_rejects_long_command() {
        let err = request("POWER").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidCommandLength { actual: 5 }));
    }

    #[test]
    fn test_validate_rejects_empty_command() {
        let err = request("").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidCommandLength { actual: 0 }));
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let body = r#"{
            "address": "10.1.1.3",
            "port": 4352,
            "class": "1",
            "password": "magic123",
            "command": "POWR",
            "param": "?"
        }"#;

        let parsed: PjRequest = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, request("POWR"));
    }

    #[test]
    fn test_request_display() {
        assert_eq!(request("POWR").to_string(), "POWR ? -> 10.1.1.3:4352");
    }
}
