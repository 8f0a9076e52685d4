use axum::{Json, http::StatusCode, response::IntoResponse};
use palisade_core::AuthError;

/// Maps the core error taxonomy onto transport status codes.
///
/// Input, policy and duplicate errors are 400s; a failed authentication is a
/// 401. Anything outside the taxonomy becomes a generic 500, with the detail
/// logged server-side and kept out of the response body.
#[derive(Debug)]
pub struct ApiError(AuthError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self.0 {
            err @ AuthError::InvalidInput(_)
            | err @ AuthError::WeakPassword
            | err @ AuthError::DuplicateUsername => (StatusCode::BAD_REQUEST, err.to_string()),
            err @ AuthError::AuthenticationFailed => (StatusCode::UNAUTHORIZED, err.to_string()),
            AuthError::Unexpected(detail) => {
                tracing::error!(error = %detail, "request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
