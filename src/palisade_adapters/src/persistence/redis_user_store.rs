use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use redis::{Commands, Connection};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use palisade_core::{UserRecord, UserStore, UserStoreError, Username};

/// Redis-backed user store: one hash per user under `user:<username>`.
#[derive(Clone)]
pub struct RedisUserStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisUserStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl UserStore for RedisUserStore {
    #[tracing::instrument(name = "Creating user in Redis", skip_all)]
    async fn create_user(&self, user: UserRecord) -> Result<(), UserStoreError> {
        let key = get_key(user.username());
        let created_at = format_timestamp(user.created_at());

        let mut conn = self.conn.write().await;

        // HSETNX on the username field claims the key; the loser of a
        // concurrent registration sees `false` here and writes nothing else.
        let claimed: bool = conn
            .hset_nx(&key, fields::USERNAME, user.username().as_str())
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        if !claimed {
            return Err(UserStoreError::UserAlreadyExists);
        }

        // `lastLoginAt` stays absent until the first successful login.
        conn.hset_multiple(
            &key,
            &[
                (
                    fields::PASSWORD,
                    user.password_hash().expose_secret().as_str(),
                ),
                (fields::CREATED_AT, created_at.as_str()),
            ],
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Reading user from Redis", skip_all)]
    async fn find_user(&self, username: &Username) -> Result<Option<UserRecord>, UserStoreError> {
        let key = get_key(username);

        let mut conn = self.conn.write().await;
        let record: HashMap<String, String> = conn
            .hgetall(&key)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if record.is_empty() {
            // HGETALL on a missing key returns an empty map, not an error.
            return Ok(None);
        }

        parse_record(username, record).map(Some)
    }

    #[tracing::instrument(name = "Recording login in Redis", skip_all)]
    async fn record_login(
        &self,
        username: &Username,
        at: DateTime<Utc>,
    ) -> Result<(), UserStoreError> {
        let key = get_key(username);
        let at = format_timestamp(at);

        let mut conn = self.conn.write().await;
        conn.hset(&key, fields::LAST_LOGIN_AT, at)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

// Field names of the stored hash. `password` holds the hash output, never
// the plaintext.
mod fields {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const CREATED_AT: &str = "createdAt";
    pub const LAST_LOGIN_AT: &str = "lastLoginAt";
}

// Key prefix to namespace user records within the store.
const USER_KEY_PREFIX: &str = "user:";

fn get_key(username: &Username) -> String {
    format!("{}{}", USER_KEY_PREFIX, username)
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, UserStoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
}

fn parse_record(
    username: &Username,
    mut record: HashMap<String, String>,
) -> Result<UserRecord, UserStoreError> {
    let password_hash = record.remove(fields::PASSWORD).ok_or_else(|| {
        UserStoreError::UnexpectedError("user record is missing the password field".into())
    })?;

    let created_at = record
        .remove(fields::CREATED_AT)
        .ok_or_else(|| {
            UserStoreError::UnexpectedError("user record is missing the createdAt field".into())
        })
        .and_then(|raw| parse_timestamp(&raw))?;

    let last_login_at = record
        .remove(fields::LAST_LOGIN_AT)
        .map(|raw| parse_timestamp(&raw))
        .transpose()?;

    Ok(UserRecord::parse(
        username.clone(),
        Secret::from(password_hash),
        created_at,
        last_login_at,
    ))
}
