use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{user::UserRecord, username::Username};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Narrow gateway over the key-value store holding user records.
///
/// Implementations are injected into the use cases at construction time, so
/// tests substitute an in-memory store without any global state. Store calls
/// may suspend for as long as the backing store needs; the core never retries
/// them, and transient-failure policy belongs to the store client.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the record iff no record exists for its username.
    ///
    /// Atomic with respect to concurrent calls for the same username: exactly
    /// one caller wins, every other observes `UserAlreadyExists`. This single
    /// conditional write is what upholds the uniqueness invariant without any
    /// locking in the core.
    async fn create_user(&self, user: UserRecord) -> Result<(), UserStoreError>;

    /// Full-record read. `Ok(None)` means "no such user", which callers must
    /// keep distinguishable from a store failure.
    async fn find_user(&self, username: &Username) -> Result<Option<UserRecord>, UserStoreError>;

    /// Field-level update of the last-login timestamp, touching nothing else.
    async fn record_login(
        &self,
        username: &Username,
        at: DateTime<Utc>,
    ) -> Result<(), UserStoreError>;
}
