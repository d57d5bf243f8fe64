//! Short key generation.
//!
//! Keys are 6 characters drawn uniformly from `[a-zA-Z0-9]`, giving a key
//! space of 62^6 (about 56.8 billion). Uniqueness is not checked here.

use rand::Rng;

/// Number of characters in a generated key.
pub const KEY_LENGTH: usize = 6;

/// Alphabet generated keys are drawn from.
pub const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of short keys.
///
/// Implementations are pure generators and never touch storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyGenerator: Send + Sync {
    /// Produces a new short key.
    fn generate(&self) -> String;
}

/// [`KeyGenerator`] backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeyGenerator;

impl KeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> String {
        generate_key()
    }
}

/// Generates a random [`KEY_LENGTH`]-character key over [`KEY_ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let key = generate_key();
/// assert_eq!(key.len(), 6);
/// assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_key() -> String {
    let mut rng = rand::rng();

    (0..KEY_LENGTH)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
pub(crate) fn is_valid_key(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| KEY_ALPHABET.contains(&b))
}
