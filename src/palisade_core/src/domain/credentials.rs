use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    errors::{AuthError, InvalidInput},
    password::Password,
    username::Username,
};

/// Credentials exactly as they arrived in the request body.
///
/// Username and password are kept as raw JSON values so that the validator,
/// not the transport's deserializer, decides what non-string input means.
/// Missing fields default to `null` and fail the same type check.
#[derive(Clone, Deserialize)]
pub struct RawCredentials {
    #[serde(default)]
    pub username: Value,
    #[serde(default)]
    pub password: Value,
}

impl fmt::Debug for RawCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A validated credential pair: normalized username plus plaintext password.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Layered validation, failing fast at the first violated check.
    ///
    /// The type check runs on the raw JSON values and the presence check on
    /// the raw untrimmed strings; only then is the username normalized and
    /// bounds-checked. The password policy is not applied here; registration
    /// enforces it separately so that login never rejects an old password.
    pub fn parse(raw: RawCredentials) -> Result<Self, AuthError> {
        let (Value::String(username), Value::String(password)) = (raw.username, raw.password)
        else {
            return Err(InvalidInput::NotStrings.into());
        };

        if username.is_empty() || password.is_empty() {
            return Err(InvalidInput::Required.into());
        }

        Ok(Self {
            username: Username::parse(&username)?,
            password: Password::new(password),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn into_parts(self) -> (Username, Password) {
        (self.username, self.password)
    }
}
