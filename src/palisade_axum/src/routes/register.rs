//! Axum-specific register route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use palisade_application::{RegisterUseCase, USER_CREATED};
use palisade_core::{PasswordHasher, RawCredentials, UserStore};

use crate::routes::error::ApiError;

/// Register a new user.
///
/// The body is deserialized into raw JSON values so that the credential
/// validator, not the extractor, decides what non-string input means.
#[tracing::instrument(name = "Register", skip(user_store, password_hasher, credentials))]
pub async fn register<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    Json(credentials): Json<RawCredentials>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    RegisterUseCase::new(&user_store, &password_hasher)
        .execute(credentials)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": USER_CREATED })),
    ))
}
