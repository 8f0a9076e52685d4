//! Axum-specific login route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use palisade_application::{LOGIN_SUCCESSFUL, LoginUseCase};
use palisade_core::{PasswordHasher, RawCredentials, UserStore};

use crate::routes::error::ApiError;

/// Authenticate an existing user and stamp the last-login time.
#[tracing::instrument(name = "Login", skip(user_store, password_hasher, credentials))]
pub async fn login<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    Json(credentials): Json<RawCredentials>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    LoginUseCase::new(&user_store, &password_hasher)
        .execute(credentials)
        .await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": LOGIN_SUCCESSFUL })),
    ))
}
