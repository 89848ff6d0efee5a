//! Short code generation.
//!
//! Provides cryptographically secure random code generation. Caller-supplied
//! codes are accepted verbatim elsewhere; only generated codes come from here.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character code whose alphabet
/// (`A-Z a-z 0-9 - _`) is safe as a URL path segment.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
