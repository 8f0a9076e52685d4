use chrono::Utc;
use palisade_core::{AuthError, Credentials, PasswordHasher, RawCredentials, UserStore};

/// Success indicator surfaced to the client on login.
pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Login use case - verifies credentials and stamps the last-login time.
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the login use case.
    ///
    /// The password policy is not re-checked here: a password that predates
    /// a stricter policy must still authenticate. An unknown
    /// username and a wrong password fail with the same error, so the
    /// response leaks nothing about which usernames exist.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, credentials))]
    pub async fn execute(&self, credentials: RawCredentials) -> Result<(), AuthError> {
        let credentials = Credentials::parse(credentials)?;

        let user = self
            .user_store
            .find_user(credentials.username())
            .await
            .map_err(|e| AuthError::Unexpected(e.to_string()))?;

        let Some(user) = user else {
            return Err(AuthError::AuthenticationFailed);
        };

        let password_matches = self
            .password_hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(AuthError::Unexpected)?;

        if !password_matches {
            return Err(AuthError::AuthenticationFailed);
        }

        self.user_store
            .record_login(credentials.username(), Utc::now())
            .await
            .map_err(|e| AuthError::Unexpected(e.to_string()))?;

        Ok(())
    }
}
