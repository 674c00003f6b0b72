//! # pjlink-core
//!
//! Core protocol implementation for PJLink class 1 devices.
//!
//! This crate provides the low-level protocol primitives:
//! - Greeting verification and the authentication digest
//! - Command line encoding
//! - Reply parsing
//! - Session state tracking
//! - Protocol constants

pub mod command;
pub mod constants;
pub mod digest;
pub mod error;
pub mod greeting;
pub mod response;
pub mod session;

pub use command::encode_command;
pub use digest::auth_digest;
pub use error::{Error, Result};
pub use greeting::Greeting;
pub use response::{PjResponse, parse_reply};
pub use session::{Session, SessionState};
