use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use palisade_core::{Password, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSettings;

/// Argon2id implementation of the password hashing port.
///
/// Every hash gets a fresh random salt, and verification delegates the
/// comparison to the `argon2` crate. Both operations run on the blocking
/// thread pool: with production cost parameters they would otherwise stall
/// the async executor.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    settings: HashingSettings,
}

impl Argon2PasswordHasher {
    pub fn new(settings: HashingSettings) -> Self {
        Self { settings }
    }

    fn hasher(&self) -> Result<Argon2<'static>, String> {
        let params = Params::new(
            self.settings.m_cost,
            self.settings.t_cost,
            self.settings.p_cost,
            None,
        )
        .map_err(|e| e.to_string())?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new(HashingSettings::default())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, String> {
        let hasher = self.hasher()?;
        let plaintext = plaintext.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(plaintext.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| Secret::from(hash.to_string()))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| e.to_string())?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, plaintext: &Password, hash: &Secret<String>) -> Result<bool, String> {
        let hasher = self.hasher()?;
        let plaintext = plaintext.clone();
        let expected_password_hash = hash.expose_secret().clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_password_hash: PasswordHash<'_> =
                    PasswordHash::new(&expected_password_hash).map_err(|e| e.to_string())?;

                match hasher.verify_password(
                    plaintext.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(e.to_string()),
                }
            })
        })
        .await
        .map_err(|e| e.to_string())?
    }
}
