use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::password::Password;

/// Salted adaptive password hashing, used as a black box.
///
/// The adaptive work factor makes both operations take visible time, so
/// callers must treat them as suspension points; implementations offload
/// the work to a blocking pool.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt: two calls on the same plaintext yield
    /// different outputs.
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, String>;

    /// Verify against the salt embedded in `hash`. `Ok(false)` is a plain
    /// mismatch; `Err` means the stored hash could not be processed at all.
    /// Comparison is delegated to the underlying primitive, which provides
    /// the constant-time semantics.
    async fn verify(&self, plaintext: &Password, hash: &Secret<String>) -> Result<bool, String>;
}
