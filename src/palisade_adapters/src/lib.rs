pub mod config;
pub mod hashing;
pub mod persistence;

pub use config::Settings;
pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapUserStore, RedisUserStore};
