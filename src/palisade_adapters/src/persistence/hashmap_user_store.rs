use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use palisade_core::{UserRecord, UserStore, UserStoreError, Username};

/// In-memory user store for tests and local development.
///
/// The existence check and the insert happen under one write lock, giving
/// creation the same one-winner semantics as the Redis implementation.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Username, UserRecord>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn create_user(&self, user: UserRecord) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.username().clone(), user);
        Ok(())
    }

    async fn find_user(&self, username: &Username) -> Result<Option<UserRecord>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn record_login(
        &self,
        username: &Username,
        at: DateTime<Utc>,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(username).ok_or(UserStoreError::UserNotFound)?;
        user.touch_login(at);
        Ok(())
    }
}
