//! Session token generation and timing-safe string comparison.
//!
//! Tokens are opaque: [`TOKEN_BYTES`] bytes from the thread-local CSPRNG,
//! lowercase hex encoded. Nothing about the customer is derivable from one.

use rand::RngCore;

/// Number of random bytes drawn for each session token.
pub const TOKEN_BYTES: usize = 256;

/// Length of the hex-encoded token string.
pub const TOKEN_HEX_LEN: usize = TOKEN_BYTES * 2;

/// Generate a new random session token.
pub fn generate_token() -> String {
    let mut bytes = vec![0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compare two strings without short-circuiting on the first differing byte.
///
/// Lengths are not hidden: inputs of different length compare unequal at once.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
