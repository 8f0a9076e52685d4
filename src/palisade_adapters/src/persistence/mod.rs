pub mod hashmap_user_store;
pub mod redis_user_store;

pub use hashmap_user_store::HashMapUserStore;
pub use redis_user_store::RedisUserStore;
