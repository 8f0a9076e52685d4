pub mod routes;

pub use routes::{error::ApiError, login::login, register::register};
