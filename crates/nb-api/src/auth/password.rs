/// bcrypt ignores everything past this many bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password with bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a password against a stored bcrypt hash
///
/// A stored hash that cannot be parsed counts as a mismatch, and so does a
/// password longer than bcrypt reads, since its tail would be ignored.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if password.len() > MAX_PASSWORD_BYTES {
        return false;
    }

    bcrypt::verify(password, hash).unwrap_or_else(|e| {
        tracing::warn!("Stored password hash could not be verified: {e}");
        false
    })
}
