//! Cookie signing.
//!
//! Flash cookies are tagged with an HMAC-SHA256 of their payload so a client
//! cannot forge a notification.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign `message` with `secret`, returning the hex-encoded tag (64 characters).
///
/// # Panics
///
/// Never in practice: HMAC accepts keys of any length (RFC 2104).
#[must_use]
pub fn sign(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC-SHA256 accepts any key size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a hex tag produced by [`sign`] without leaking timing information.
#[must_use]
pub fn verify(secret: &str, message: &str, tag: &str) -> bool {
    constant_time_eq(&sign(secret, message), tag)
}

/// Constant-time string comparison.
#[must_use]
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
