//! # Palisade - Credential Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the service
//! components. Use this crate to get access to the whole authentication
//! stack in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `UserRecord`, the
//!   `AuthError` taxonomy
//! - **Ports**: `UserStore`, `PasswordHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`
//! - **Adapters**: `RedisUserStore`, `HashMapUserStore`,
//!   `Argon2PasswordHasher`, `Settings`
//! - **Service**: `AuthService` - the assembled HTTP service

// ============================================================================
// Core Domain Types and Ports
// ============================================================================

pub use palisade_core::{
    AuthError, Credentials, InvalidInput, Password, PasswordHasher, RawCredentials, UserRecord,
    UserStore, UserStoreError, Username,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use palisade_application::*;
}

pub use palisade_application::{LOGIN_SUCCESSFUL, LoginUseCase, RegisterUseCase, USER_CREATED};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use palisade_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use palisade_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use palisade_adapters::config::*;
    }
}

pub use palisade_adapters::{Argon2PasswordHasher, HashMapUserStore, RedisUserStore, Settings};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use palisade_auth_service::{AuthService, configure_redis, get_redis_client};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
