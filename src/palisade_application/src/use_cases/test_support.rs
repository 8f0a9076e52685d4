use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use palisade_core::{
    Password, PasswordHasher, RawCredentials, UserRecord, UserStore, UserStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tokio::sync::RwLock;

pub(crate) fn credentials(
    username: impl Into<Value>,
    password: impl Into<Value>,
) -> RawCredentials {
    RawCredentials {
        username: username.into(),
        password: password.into(),
    }
}

/// In-memory user store that also counts every gateway call, so tests can
/// assert that rejected input never reaches the store.
#[derive(Default, Clone)]
pub(crate) struct MockUserStore {
    users: Arc<RwLock<HashMap<Username, UserRecord>>>,
    calls: Arc<AtomicUsize>,
}

impl MockUserStore {
    pub(crate) async fn seed(&self, user: UserRecord) {
        self.users.write().await.insert(user.username().clone(), user);
    }

    pub(crate) async fn get(&self, username: &str) -> Option<UserRecord> {
        let username = Username::parse(username).unwrap();
        self.users.read().await.get(&username).cloned()
    }

    pub(crate) async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn create_user(&self, user: UserRecord) -> Result<(), UserStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.username().clone(), user);
        Ok(())
    }

    async fn find_user(&self, username: &Username) -> Result<Option<UserRecord>, UserStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn record_login(
        &self,
        username: &Username,
        at: DateTime<Utc>,
    ) -> Result<(), UserStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        let user = users.get_mut(username).ok_or(UserStoreError::UserNotFound)?;
        user.touch_login(at);
        Ok(())
    }
}

/// Deterministic stand-in for the real hasher: fast, and transparent enough
/// for tests to fabricate stored hashes.
#[derive(Clone)]
pub(crate) struct MockPasswordHasher;

impl MockPasswordHasher {
    pub(crate) fn hash_of(plaintext: &str) -> String {
        format!("hashed:{plaintext}")
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, String> {
        Ok(Secret::new(Self::hash_of(plaintext.as_ref().expose_secret())))
    }

    async fn verify(&self, plaintext: &Password, hash: &Secret<String>) -> Result<bool, String> {
        Ok(hash.expose_secret() == &Self::hash_of(plaintext.as_ref().expose_secret()))
    }
}
