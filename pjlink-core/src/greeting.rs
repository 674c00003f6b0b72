//! Connection greeting verification
//!
//! A PJLink device opens every session with a one-line greeting:
//!
//! ```text
//! PJLINK 1 632A531A
//! ```
//!
//! The magic token, the protocol class digit, then the per-connection seed
//! for the authentication digest. The greeting only exists to prove we are
//! talking to a class 1 device and to hand over the seed; it is discarded
//! once the digest is computed.

use crate::error::{Error, Result};

/// Verified connection greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Protocol class digit (always "1" once verified)
    pub class: String,

    /// Per-connection authentication seed
    pub seed: String,
}

impl Greeting {
    /// Magic token every PJLink greeting opens with
    pub const MAGIC: &'static str = "PJLINK";

    /// Protocol class this client speaks
    pub const CLASS_1: &'static str = "1";

    /// Verify the three greeting tokens
    ///
    /// Anything that is not a class 1 PJLink greeting is rejected here,
    /// before a single command byte goes out.
    pub fn parse(magic: &str, class: &str, seed: &str) -> Result<Self> {
        if magic != Self::MAGIC {
            return Err(Error::UnexpectedGreeting {
                got: magic.to_string(),
            });
        }

        if class != Self::CLASS_1 {
            return Err(Error::UnsupportedClass {
                got: class.to_string(),
            });
        }

        Ok(Self {
            class: class.to_string(),
            seed: seed.to_string(),
        })
    }
}
