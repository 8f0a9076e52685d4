use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use palisade_adapters::{Argon2PasswordHasher, HashMapUserStore, config::HashingSettings};
use palisade_auth_service::AuthService;

/// The assembled service mounted exactly as the binary mounts it, backed by
/// the in-memory store so the suite needs no running Redis.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let user_store = HashMapUserStore::new();
        // Cheap hashing parameters keep the suite fast; production costs are
        // configured through Settings.
        let password_hasher = Argon2PasswordHasher::new(HashingSettings {
            m_cost: 1024,
            t_cost: 1,
            p_cost: 1,
        });

        let router = Router::new().nest(
            "/api/auth",
            AuthService::new(user_store, password_hasher).as_nested_router(),
        );

        Self { router }
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request should produce a response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = serde_json::from_slice(&bytes).expect("response body should be JSON");

        (status, body)
    }

    pub async fn register(&self, body: Value) -> (StatusCode, Value) {
        self.post_json("/api/auth/register", body).await
    }

    pub async fn login(&self, body: Value) -> (StatusCode, Value) {
        self.post_json("/api/auth/login", body).await
    }
}
