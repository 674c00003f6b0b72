//! Transport layer for PJLink
//!
//! Provides TCP communication with projectors.

pub mod error;
pub mod tcp;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use std::time::Duration;

use async_trait::async_trait;

/// Transport trait for device communication
///
/// TCP is the only wire PJLink class 1 runs over; the trait is the seam
/// that lets session logic run against an in-memory fake in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connect to device
    async fn connect(&mut self) -> Result<()>;

    /// Disconnect from device
    async fn disconnect(&mut self) -> Result<()>;

    /// Check if connected
    fn is_connected(&self) -> bool;

    /// Send raw bytes
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read the next whitespace-delimited token
    ///
    /// Every buffer fill is bounded by `deadline`.
    async fn read_token(&mut self, deadline: Duration) -> Result<String>;

    /// Get remote address
    fn remote_addr(&self) -> String;
}
