//! Short identifier generation.
//!
//! Identifiers are drawn uniformly from a 64-symbol URL-safe alphabet. At the default
//! length of 7 that is 64^7 (about 4.4 * 10^12) possible values, so collisions stay
//! negligible for the expected record volume; the store still enforces uniqueness.

use rand::Rng;

/// Default identifier length.
pub const DEFAULT_SHORT_ID_LENGTH: usize = 7;

/// Smallest accepted identifier length.
pub const MIN_SHORT_ID_LENGTH: usize = 4;

/// Largest accepted identifier length.
pub const MAX_SHORT_ID_LENGTH: usize = 32;

/// Path segments served by fixed routes. An identifier equal to one of them would be
/// unreachable through `GET /{short_id}`.
const RESERVED_SHORT_IDS: &[&str] = &["new", "health", "public"];

/// URL-safe alphabet: no character needs percent-encoding in a path segment.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random short identifier of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id(7);
/// assert_eq!(id.len(), 7);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_short_id(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `short_id` collides with a fixed route.
///
/// Routing is case-sensitive, so only exact matches are reserved.
pub fn is_reserved(short_id: &str) -> bool {
    RESERVED_SHORT_IDS.contains(&short_id)
}

/// Returns true if `length` is within the accepted identifier length range.
pub fn is_valid_length(length: usize) -> bool {
    (MIN_SHORT_ID_LENGTH..=MAX_SHORT_ID_LENGTH).contains(&length)
}
