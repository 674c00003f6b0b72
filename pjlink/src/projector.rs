//! High-level projector interface

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use pjlink_core::{Greeting, PjResponse, Session, auth_digest, encode_command, parse_reply};
use pjlink_transport::{TcpTransport, Transport};
use pjlink_types::PjRequest;

use crate::error::{Error, Result};

/// PJLink projector
///
/// Drives exactly one protocol session: connect and verify the greeting,
/// send one authenticated command, read one reply, close. Create a new
/// instance per request; class 1 sessions carry a single command.
///
/// # Examples
///
/// ```no_run
/// use pjlink::Projector;
///
/// #[tokio::main]
/// async fn main() -> pjlink::Result<()> {
///     let mut projector = Projector::new("10.1.1.3", 4352)
///         .with_password("magic123");
///
///     projector.connect().await?;
///     let response = projector.command("1", "POWR", "?").await?;
///     println!("Power status: {}", response.code);
///
///     projector.disconnect().await;
///     Ok(())
/// }
/// ```
pub struct Projector {
    transport: Box<dyn Transport>,
    session: Session,
    seed: Option<String>,
    password: String,
    timeout: Duration,
}

impl Projector {
    /// Create a new projector handle (TCP transport)
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            transport: Box::new(TcpTransport::new(address, port)),
            session: Session::new(),
            seed: None,
            password: String::new(),
            timeout: Duration::from_secs(pjlink_core::constants::DEFAULT_READ_TIMEOUT),
        }
    }

    /// Set the authentication password (default: empty)
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the read deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if connected
    pub fn is_connected(&self) -> bool {
        self.session.is_open() && self.transport.is_connected()
    }

    /// Connect to the projector and verify its greeting
    ///
    /// Dials TCP, reads the three greeting tokens and verifies magic and
    /// protocol class. The greeting's seed is kept for the authentication
    /// digest; nothing else of it survives.
    ///
    /// # Errors
    ///
    /// Returns an error if the dial fails or times out, or if the endpoint
    /// does not present a PJLink class 1 greeting. The socket is released
    /// before the error surfaces.
    pub async fn connect(&mut self) -> Result<()> {
        info!("Connecting to {}...", self.transport.remote_addr());

        self.transport.connect().await?;
        self.session.opened()?;

        match self.handshake().await {
            Ok(greeting) => {
                debug!("Greeting verified (class {})", greeting.class);

                self.seed = Some(greeting.seed);
                self.session.greeted()?;
                Ok(())
            }
            Err(e) => {
                // A failed handshake leaves nothing worth keeping open
                self.disconnect().await;
                Err(e)
            }
        }
    }

    /// Send one authenticated command and parse its reply
    ///
    /// Prefixes the line with the session digest, writes it with the CR
    /// terminator, and reads exactly one reply token. A device rejecting
    /// the password wraps its answer in a `PJLINK ERRA` envelope; the
    /// token after the magic is the reply that gets parsed, and it yields
    /// the ERRA sentinel response rather than an error.
    pub async fn command(&mut self, class: &str, command: &str, param: &str) -> Result<PjResponse> {
        let seed = self.seed.as_deref().ok_or(Error::NotConnected)?;

        let digest = auth_digest(seed, &self.password);
        let line = encode_command(&digest, class, command, param);

        // Enforce one command per session before anything goes out
        self.session.command_sent()?;

        trace!("Sending: {}", line);
        self.transport.send(format!("{line}\r").as_bytes()).await?;

        let mut token = self.transport.read_token(self.timeout).await?;
        if token == Greeting::MAGIC {
            token = self.transport.read_token(self.timeout).await?;
        }

        trace!("Received: {}", token);

        Ok(parse_reply(&token)?)
    }

    /// Release the socket
    ///
    /// Idempotent, and safe to call on every exit path: teardown failures
    /// are logged, not surfaced.
    pub async fn disconnect(&mut self) {
        if let Err(e) = self.transport.disconnect().await {
            warn!("Teardown failed: {}", e);
        }

        self.session.close();
        self.seed = None;
    }

    async fn handshake(&mut self) -> Result<Greeting> {
        let magic = self.transport.read_token(self.timeout).await?;
        let class = self.transport.read_token(self.timeout).await?;
        let seed = self.transport.read_token(self.timeout).await?;

        trace!("Greeting tokens: {:?} {:?} {:?}", magic, class, seed);

        Ok(Greeting::parse(&magic, &class, &seed)?)
    }
}

/// Run one request end to end
///
/// Validate, dial, handshake, send the command, parse the reply. The
/// first error wins and the socket is released on every path. One TCP
/// session per call; no retries.
pub async fn execute(request: &PjRequest) -> Result<PjResponse> {
    request.validate()?;

    let mut projector = Projector::new(request.address.clone(), request.port)
        .with_password(request.password.clone());

    let result = run(&mut projector, request).await;
    projector.disconnect().await;

    match &result {
        Ok(response) => info!("{}: {} = {}", request, response.command, response.code),
        Err(e) => debug!("{} failed: {}", request, e),
    }

    result
}

async fn run(projector: &mut Projector, request: &PjRequest) -> Result<PjResponse> {
    projector.connect().await?;
    projector
        .command(&request.class, &request.command, &request.param)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projector_create() {
        let projector = Projector::new("192.168.1.210", 4352);
        assert!(!projector.is_connected());
    }

    #[tokio::test]
    async fn test_command_before_connect() {
        let mut projector = Projector::new("192.168.1.210", 4352);
        let err = projector.command("1", "POWR", "?").await.unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }

    #[tokio::test]
    async fn test_disconnect_without_connect() {
        let mut projector = Projector::new("192.168.1.210", 4352);
        projector.disconnect().await;
        projector.disconnect().await;
        assert!(!projector.is_connected());
    }
}
