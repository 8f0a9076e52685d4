pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{Credentials, RawCredentials},
    errors::{AuthError, InvalidInput},
    password::Password,
    user::UserRecord,
    username::Username,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::PasswordHasher,
};
