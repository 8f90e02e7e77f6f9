//! Password hashing and verification.
//!
//! Thin wrapper over bcrypt. Hashing salts internally, so the same password
//! never produces the same hash twice; verification re-derives the hash and
//! compares in constant time. A hashing failure is a hard error for the
//! caller, there is no fallback value.

use bcrypt::BcryptError;

/// Hash a plaintext password with the given bcrypt cost factor.
///
/// # Errors
///
/// Returns the underlying bcrypt error if hashing fails (e.g. the cost is
/// out of range or randomness is unavailable).
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, cost)
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `Ok(false)` for a mismatch; `Err` only when the stored hash is
/// unparseable or verification itself fails.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hash)
}
