//! # pjlink
//!
//! Rust client for the PJLink class 1 projector-control protocol.
//!
//! ## Features
//!
//! - Type-safe protocol implementation
//! - Async/await API using Tokio
//! - Challenge-response authentication
//! - One TCP session per command, torn down on every path
//!
//! ## Quick Start
//!
//! ```no_run
//! use pjlink::{PjRequest, execute};
//!
//! #[tokio::main]
//! async fn main() -> pjlink::Result<()> {
//!     let request = PjRequest {
//!         address: "10.1.1.3".to_string(),
//!         port: 4352,
//!         class: "1".to_string(),
//!         password: "magic123".to_string(),
//!         command: "POWR".to_string(),
//!         param: "?".to_string(),
//!     };
//!
//!     let response = execute(&request).await?;
//!     println!("{} = {}", response.command, response.code);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod projector;

// Re-exports
pub use error::{Error, ErrorKind, Result};
pub use projector::{Projector, execute};

// Re-export types
pub use pjlink_core::{PjResponse, constants};
pub use pjlink_types::PjRequest;
