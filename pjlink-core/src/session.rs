//! Session state tracking for one PJLink exchange
//!
//! A session lives for exactly one request and walks a fixed path:
//! Closed -> Connected -> Greeted -> CommandSent -> Closed. Out-of-order
//! transitions are rejected; close is legal from anywhere.

use crate::error::{Error, Result};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No socket
    Closed,

    /// TCP established, greeting not yet verified
    Connected,

    /// Greeting verified, seed in hand
    Greeted,

    /// Command written, awaiting the reply
    CommandSent,
}

/// Per-request session state machine
///
/// Owned exclusively by the protocol session driving one request; no state
/// crosses request boundaries.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Create a new closed session
    pub fn new() -> Self {
        Self {
            state: SessionState::Closed,
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the session holds an open socket
    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    /// Record the TCP connect
    pub fn opened(&mut self) -> Result<()> {
        self.transition(SessionState::Closed, SessionState::Connected)
    }

    /// Record a verified greeting
    pub fn greeted(&mut self) -> Result<()> {
        self.transition(SessionState::Connected, SessionState::Greeted)
    }

    /// Record the command write
    pub fn command_sent(&mut self) -> Result<()> {
        self.transition(SessionState::Greeted, SessionState::CommandSent)
    }

    /// Drop back to closed from any state
    ///
    /// Idempotent: closing a closed session is a no-op.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    fn transition(&mut self, from: SessionState, to: SessionState) -> Result<()> {
        if self.state != from {
            return Err(Error::InvalidSessionState(format!(
                "cannot move to {:?} from {:?}",
                to, self.state
            )));
        }

        self.state = to;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(!session.is_open());
    }

    #[test]
    fn test_session_full_walk() {
        let mut session = Session::new();

        session.opened().unwrap();
        assert_eq!(session.state(), SessionState::Connected);
        assert!(session.is_open());

        session.greeted().unwrap();
        assert_eq!(session.state(), SessionState::Greeted);

        session.command_sent().unwrap();
        assert_eq!(session.state(), SessionState::CommandSent);

        session.close();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(!session.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut session = Session::new();
        session.close();
        session.close();
        assert_eq!(session.state(), SessionState::Closed);

        session.opened().unwrap();
        session.close();
        session.close();
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_close_from_any_state() {
        let mut session = Session::new();
        session.opened().unwrap();
        session.greeted().unwrap();
        session.close();
        assert!(!session.is_open());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut session = Session::new();

        // Cannot greet or send before connecting
        assert!(session.greeted().is_err());
        assert!(session.command_sent().is_err());

        session.opened().unwrap();

        // Cannot connect twice or send before the greeting
        assert!(session.opened().is_err());
        assert!(session.command_sent().is_err());
    }

    #[test]
    fn test_session_reusable_after_close() {
        let mut session = Session::new();
        session.opened().unwrap();
        session.close();

        // A closed session can start over
        session.opened().unwrap();
        assert_eq!(session.state(), SessionState::Connected);
    }
}
