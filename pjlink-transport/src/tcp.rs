//! TCP transport

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::{Transport, error::*};

/// ASCII whitespace that delimits PJLink tokens
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\r' | b'\n' | b'\t')
}

/// TCP transport for PJLink devices
///
/// PJLink frames everything by whitespace rather than by length header, so
/// reads are tokenized: the transport buffers raw bytes internally and
/// hands out one whitespace-delimited token at a time.
pub struct TcpTransport {
    addr: String,
    port: u16,
    socket_addr: Option<SocketAddr>,
    stream: Option<TcpStream>,
    buf: BytesMut,
    connect_timeout: Duration,
}

impl TcpTransport {
    /// Create new TCP transport
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            socket_addr: None,
            stream: None,
            buf: BytesMut::with_capacity(256),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Resolve address to SocketAddr
    async fn resolve_addr(&mut self) -> Result<SocketAddr> {
        if let Some(addr) = self.socket_addr {
            return Ok(addr);
        }

        let addr_str = format!("{}:{}", self.addr, self.port);

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&addr_str)
            .await
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", addr_str, e)))?
            .collect();

        let addr = addrs
            .first()
            .ok_or_else(|| Error::InvalidAddress(format!("No addresses found for {}", addr_str)))?;

        self.socket_addr = Some(*addr);
        Ok(*addr)
    }

    /// Pull the next complete token out of the buffer, if one is there
    ///
    /// With `at_eof` set, a trailing unterminated token is flushed out
    /// instead of waiting for a delimiter that will never come.
    fn take_buffered_token(&mut self, at_eof: bool) -> Option<String> {
        while self.buf.first().is_some_and(|b| is_delimiter(*b)) {
            self.buf.advance(1);
        }

        match self.buf.iter().position(|b| is_delimiter(*b)) {
            Some(end) => {
                let token = self.buf.split_to(end);
                Some(String::from_utf8_lossy(&token).into_owned())
            }
            None if at_eof && !self.buf.is_empty() => {
                let token = self.buf.split();
                Some(String::from_utf8_lossy(&token).into_owned())
            }
            None => None,
        }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyConnected);
        }

        let addr = self.resolve_addr().await?;

        debug!("Connecting to {}...", addr);

        let stream = timeout(self.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| Error::ConnectTimeout)?
            .map_err(Error::ConnectFailed)?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true).map_err(Error::ConnectFailed)?;

        debug!("Connected to {}", addr);

        self.buf.clear();
        self.stream = Some(stream);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            debug!("Disconnecting from {}...", self.remote_addr());

            // Graceful shutdown
            let _ = stream.shutdown().await;
        }

        self.socket_addr = None;
        self.buf.clear();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        trace!("Sending {} bytes: {:?}", data.len(), String::from_utf8_lossy(data));

        stream.write_all(data).await?;
        stream.flush().await?;

        Ok(())
    }

    async fn read_token(&mut self, deadline: Duration) -> Result<String> {
        if let Some(token) = self.take_buffered_token(false) {
            trace!("Token (buffered): {:?}", token);
            return Ok(token);
        }

        loop {
            let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

            let n = timeout(deadline, stream.read_buf(&mut self.buf))
                .await
                .map_err(|_| Error::ReadTimeout)?
                .map_err(Error::Io)?;

            if n == 0 {
                // Peer closed; a pending partial token still counts
                return self
                    .take_buffered_token(true)
                    .ok_or(Error::ConnectionClosed);
            }

            if let Some(token) = self.take_buffered_token(false) {
                trace!("Token: {:?}", token);
                return Ok(token);
            }
        }
    }

    fn remote_addr(&self) -> String {
        self.socket_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.addr, self.port))
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("TCP transport dropped while still connected");
        }
    }
}
