use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use palisade_axum::{login, register};
use palisade_core::{PasswordHasher, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Request bodies larger than this are rejected before deserialization.
const REQUEST_BODY_LIMIT: usize = 10 * 1024;

/// Main authentication service wiring the register and login routes.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService backed by the given store and hasher.
    ///
    /// # Note on Architecture
    /// Both dependencies implement Clone via internal Arc sharing, so the
    /// per-request clone of the state tuple is cheap. Swapping the store for
    /// the in-memory implementation gives a fully self-contained service for
    /// tests.
    pub fn new<U, H>(user_store: U, password_hasher: H) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<U, H>))
            .route("/login", post(login::<U, H>))
            .with_state((user_store, password_hasher))
            .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another
    /// application, typically under `/api/auth`.
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server with its routes mounted
    /// at `/api/auth`.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = Router::new().nest("/api/auth", self.as_nested_router());

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
