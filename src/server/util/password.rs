//! Password strength policy and bcrypt hashing.
//!
//! Hashing and verification are CPU bound, so they run on tokio's blocking pool.

use rand::Rng;

use crate::server::error::Error;

/// bcrypt work factor for stored password hashes.
pub const BCRYPT_COST: u32 = 12;

/// Minimum number of characters in an acceptable password.
pub const MIN_PASSWORD_LENGTH: usize = 7;

/// Whether `password` satisfies the strength policy.
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters including a lowercase
/// ASCII letter, an uppercase ASCII letter, an ASCII digit, and a character that is
/// not an ASCII letter or digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Hash a plaintext password with [`BCRYPT_COST`].
pub async fn hash_password(password: String) -> Result<String, Error> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

    Ok(hash)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash is reported as an error rather than a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

    Ok(matches)
}

/// Generate a temporary password of the form `temp######A!`.
///
/// The fixed suffix guarantees the result passes [`is_strong_password`].
pub fn generate_temp_password() -> String {
    let digits: u32 = rand::rng().random_range(100_000..1_000_000);

    format!("temp{}A!", digits)
}
