use thiserror::Error;

/// First-failure input validation errors.
///
/// Validation is layered and stops at the first violated check, so a request
/// with several problems reports only the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Username and password must be strings")]
    NotStrings,
    #[error("Username and password are required")]
    Required,
    #[error("Username must be between 3 and 20 characters long")]
    UsernameLength,
}

/// Closed error taxonomy of the authentication core.
///
/// Each variant carries the exact message the HTTP adapter hands to the
/// client. `Unexpected` is the one exception: its payload is internal detail
/// (store errors, hasher failures) that the adapter logs and replaces with a
/// generic response.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error(
        "Password must be at least 8 characters long and contain at least one uppercase letter, one lowercase letter, and one number"
    )]
    WeakPassword,
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Invalid username or password")]
    AuthenticationFailed,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::WeakPassword, Self::WeakPassword) => true,
            (Self::DuplicateUsername, Self::DuplicateUsername) => true,
            (Self::AuthenticationFailed, Self::AuthenticationFailed) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}
