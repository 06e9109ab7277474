use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// A structurally valid bcrypt hash of a throwaway value. Login verifies a
/// candidate password against this when the email does not resolve to a user,
/// so the unknown-email path costs the same bcrypt round as a real mismatch.
pub const PHANTOM_HASH: &str = "$2b$12$C9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
