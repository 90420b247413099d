//! Shared values for fixtures.

/// Plaintext password every fixture user is created with.
///
/// Satisfies the password strength rules so tests can reuse it for registration
/// and password change flows.
pub static TEST_PASSWORD: &str = "Abc123!x";

/// Domain appended to a fixture username to build its email address.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";

/// bcrypt cost for fixture hashes; the minimum bcrypt accepts.
pub(crate) const TEST_BCRYPT_COST: u32 = 4;
