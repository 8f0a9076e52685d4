use chrono::{DateTime, Utc};
use secrecy::Secret;

use crate::domain::username::Username;

/// A stored user record, one per normalized username.
///
/// `created_at` is set once at construction and never changes afterwards;
/// `last_login_at` starts out absent and is the only field login touches.
/// The hash is wrapped in [`Secret`] so it stays out of `Debug` output.
#[derive(Debug, Clone)]
pub struct UserRecord {
    username: Username,
    password_hash: Secret<String>,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// A fresh record as produced by registration.
    pub fn new(username: Username, password_hash: Secret<String>) -> Self {
        Self {
            username,
            password_hash,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// Rehydrate a record read back from a store.
    pub fn parse(
        username: Username,
        password_hash: Secret<String>,
        created_at: DateTime<Utc>,
        last_login_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            username,
            password_hash,
            created_at,
            last_login_at,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    /// Login-touch: overwrite the last-login timestamp, leaving every other
    /// field alone.
    pub fn touch_login(&mut self, at: DateTime<Utc>) {
        self.last_login_at = Some(at);
    }
}
