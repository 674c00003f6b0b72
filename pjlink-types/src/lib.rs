//! Type definitions for pjlink

pub mod error;
pub mod request;

pub use error::{Error, Result};
pub use request::PjRequest;
