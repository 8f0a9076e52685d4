use palisade_core::{
    AuthError, Credentials, PasswordHasher, RawCredentials, UserRecord, UserStore, UserStoreError,
};

/// Success indicator surfaced to the client on registration.
pub const USER_CREATED: &str = "User created successfully";

/// Register use case - turns validated credentials into a stored user record.
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
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

    /// Execute the register use case.
    ///
    /// Validation runs before anything else, so the store sees no traffic for
    /// rejected input. The record is created with a single conditional write:
    /// two racing registrations for the same username produce one winner and
    /// one `DuplicateUsername`, and a failed hash computation can never leave
    /// a partial record behind.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, credentials))]
    pub async fn execute(&self, credentials: RawCredentials) -> Result<(), AuthError> {
        let credentials = Credentials::parse(credentials)?;
        credentials.password().enforce_policy()?;

        let password_hash = self
            .password_hasher
            .hash(credentials.password())
            .await
            .map_err(AuthError::Unexpected)?;

        let (username, _) = credentials.into_parts();
        let user = UserRecord::new(username, password_hash);

        self.user_store
            .create_user(user)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => AuthError::DuplicateUsername,
                other => AuthError::Unexpected(other.to_string()),
            })
    }
}
