use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use palisade_adapters::{Argon2PasswordHasher, RedisUserStore, config::Settings};
use palisade_auth_service::{AuthService, configure_redis};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = Settings::load();

    // Setup Redis connection
    let redis_conn = configure_redis();

    // Create the store and hasher
    let user_store = RedisUserStore::new(redis_conn);
    let password_hasher = Argon2PasswordHasher::new(config.hashing);

    // Create the auth service
    let auth_service = AuthService::new(user_store, password_hasher);

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!("Starting auth service...");

    auth_service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
