use std::sync::Arc;

use redis::{Client, Connection, RedisResult};
use tokio::sync::RwLock;

use palisade_adapters::config::Settings;

/// Configure and return a shared Redis connection from the loaded settings.
///
/// # Panics
/// Panics if unable to connect to Redis.
pub fn configure_redis() -> Arc<RwLock<Connection>> {
    let redis_host_name = &Settings::load().redis.host_name;

    let conn = get_redis_client(redis_host_name)
        .expect("Failed to get Redis client")
        .get_connection()
        .expect("Failed to get Redis connection");

    Arc::new(RwLock::new(conn))
}

/// Create a Redis client for the given host name.
pub fn get_redis_client(redis_host_name: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{redis_host_name}/");
    Client::open(redis_url)
}
