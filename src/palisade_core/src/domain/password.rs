use secrecy::{ExposeSecret, Secret};

use crate::domain::errors::AuthError;

pub const PASSWORD_MIN_CHARS: usize = 8;

/// A plaintext password as received from the client.
///
/// Wrapped in [`Secret`] so it is redacted from `Debug` output and never ends
/// up in logs or error messages. The policy check applies on the registration
/// path only; login accepts whatever the user registered with.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(plaintext: String) -> Self {
        Self(Secret::new(plaintext))
    }

    /// Registration password policy: at least 8 characters with at least one
    /// ASCII lowercase letter, one uppercase letter and one digit.
    pub fn enforce_policy(&self) -> Result<(), AuthError> {
        let plaintext = self.0.expose_secret();

        let long_enough = plaintext.chars().count() >= PASSWORD_MIN_CHARS;
        let has_lowercase = plaintext.chars().any(|c| c.is_ascii_lowercase());
        let has_uppercase = plaintext.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = plaintext.chars().any(|c| c.is_ascii_digit());

        if long_enough && has_lowercase && has_uppercase && has_digit {
            Ok(())
        } else {
            Err(AuthError::WeakPassword)
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
