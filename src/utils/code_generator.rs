//! Short code generation.
//!
//! Codes are drawn uniformly from the 62 ASCII letters and digits, so they are
//! URL-safe without escaping. Generation never fails; collisions with stored
//! codes are handled by [`crate::application::services::LinkService`].

use rand::Rng;

/// Code length used when `SHORT_CODE_LENGTH` is not configured.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Allowed range for a configured code length.
pub const CODE_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 4..=32;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Path segments served by fixed routes. A generated code must never shadow them.
const RESERVED_CODES: &[&str] = &["health", "api", "shortUrls", "delete", "static"];

/// Generates a random alphanumeric short code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    loop {
        let code: String = (0..length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect();

        if !is_reserved(&code) {
            return code;
        }
    }
}

/// Returns true if `code` collides with a fixed route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Returns true if `code` could have been produced by [`generate_code`].
///
/// Used to reject lookups for impossible codes without a database round-trip.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= *CODE_LENGTH_RANGE.end()
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
