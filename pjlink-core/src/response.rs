//! Reply parsing
//!
//! A successful exchange ends with a single reply token shaped like
//! `%1POWR=0`. A projector that rejects the password answers with its
//! `PJLINK ERRA` envelope instead; that is still a completed exchange, so
//! it parses to a fixed sentinel response rather than an error.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token the device embeds in a reply to signal rejected credentials
pub const AUTH_ERROR_TOKEN: &str = "ERRA";

/// Shortest parseable reply: `%`, class digit, four command bytes, `=`
pub const MIN_REPLY_LEN: usize = 7;

/// Parsed projector reply
///
/// # Reply layout
///
/// ```text
/// %<class><command>=<code>
///  1 byte  4 bytes   rest
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PjResponse {
    /// Protocol class digit echoed by the device
    pub class: String,

    /// Command mnemonic echoed by the device
    pub command: String,

    /// Response code: a numeric status or a device error token such as
    /// "ERR1".."ERR4"; not interpreted here, the caller decides
    pub code: String,
}

impl PjResponse {
    /// Sentinel response for a device-rejected password
    pub fn auth_failure() -> Self {
        Self {
            class: "0".to_string(),
            command: AUTH_ERROR_TOKEN.to_string(),
            code: "0".to_string(),
        }
    }

    /// Check if the device rejected the password
    pub fn is_auth_failure(&self) -> bool {
        self.command == AUTH_ERROR_TOKEN
    }
}

/// Parse the final reply token of an exchange
///
/// Field offsets are fixed by the wire format, so the token is
/// bounds-checked up front instead of sliced blindly: class digit at
/// offset 1, command at offsets 2..6, code from offset 7 on.
///
/// # Examples
///
/// ```
/// use pjlink_core::response;
///
/// let reply = response::parse_reply("%1POWR=0").unwrap();
/// assert_eq!(reply.class, "1");
/// assert_eq!(reply.command, "POWR");
/// assert_eq!(reply.code, "0");
/// ```
pub fn parse_reply(token: &str) -> Result<PjResponse> {
    if token.contains(AUTH_ERROR_TOKEN) {
        return Ok(PjResponse::auth_failure());
    }

    if token.len() < MIN_REPLY_LEN {
        return Err(Error::ReplyTooShort {
            min: MIN_REPLY_LEN,
            actual: token.len(),
        });
    }

    // The offsets below are byte offsets; a multi-byte character anywhere
    // in the fixed fields cannot come from a PJLink device
    if !token.is_ascii() {
        return Err(Error::MalformedReply {
            token: token.to_string(),
        });
    }

    Ok(PjResponse {
        class: token[1..2].to_string(),
        command: token[2..6].to_string(),
        code: token[7..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_power_status() {
        let reply = parse_reply("%1POWR=0").unwrap();
        assert_eq!(
            reply,
            PjResponse {
                class: "1".to_string(),
                command: "POWR".to_string(),
                code: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_multi_byte_code() {
        let reply = parse_reply("%1INF1=SONY").unwrap();
        assert_eq!(reply.command, "INF1");
        assert_eq!(reply.code, "SONY");
    }

    #[test]
    fn test_parse_device_error_code() {
        // ERR1..ERR4 are payload codes, not parse failures
        let reply = parse_reply("%1INPT=ERR2").unwrap();
        assert_eq!(reply.code, "ERR2");
        assert!(!reply.is_auth_failure());
    }

    #[test]
    fn test_parse_auth_failure_anywhere() {
        for token in ["ERRA", "PJLINK ERRA", "%1ERRA", "xxERRAyy"] {
            let reply = parse_reply(token).unwrap();
            assert_eq!(reply, PjResponse::auth_failure());
            assert!(reply.is_auth_failure());
        }
    }

    #[test]
    fn test_auth_failure_sentinel_fields() {
        let sentinel = PjResponse::auth_failure();
        assert_eq!(sentinel.class, "0");
        assert_eq!(sentinel.command, "ERRA");
        assert_eq!(sentinel.code, "0");
    }

    #[test]
    fn test_parse_short_token_fails() {
        for token in ["", "%", "%1", "%1P", "%1POWR"] {
            let err = parse_reply(token).unwrap_err();
            assert!(
                matches!(err, Error::ReplyTooShort { min: 7, .. }),
                "token {token:?} should be too short"
            );
            assert!(err.is_format());
        }
    }

    #[test]
    fn test_parse_empty_code() {
        // Exactly the minimum length: everything after offset 7 is empty
        let reply = parse_reply("%1POWR=").unwrap();
        assert_eq!(reply.command, "POWR");
        assert_eq!(reply.code, "");
    }

    #[test]
    fn test_parse_non_ascii_never_panics() {
        let err = parse_reply("%1PÖWR=0").unwrap_err();
        assert!(matches!(err, Error::MalformedReply { .. }));
        assert!(err.is_format());
    }

    #[test]
    fn test_response_serializes_to_json() {
        let reply = parse_reply("%1POWR=0").unwrap();
        let json = serde_json::to_string(&reply).unwrap();
        assert_eq!(json, r#"{"class":"1","command":"POWR","code":"0"}"#);
    }
}
