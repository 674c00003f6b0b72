//! PJLink authentication digest
//!
//! Class 1 authentication is challenge-response: the projector sends a
//! random seed in its greeting, and every command line must be prefixed
//! with the hash of seed + password. The hash is MD5 because the wire
//! protocol fixes it; there is nothing to negotiate.

use md5::{Digest, Md5};

/// Compute the authentication digest for one session
///
/// Concatenates the greeting seed with the password and hashes the result.
///
/// # Arguments
///
/// * `seed` - Random token from the device greeting
/// * `password` - Password configured on the projector (may be empty)
///
/// # Returns
///
/// 32-character lowercase hex digest to prefix the command line with.
///
/// # Examples
///
/// ```
/// use pjlink_core::digest;
///
/// let d = digest::auth_digest("632A531A", "magic123");
/// assert_eq!(d.len(), 32);
/// ```
pub fn auth_digest(seed: &str, password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(seed.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
