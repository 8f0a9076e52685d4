pub mod use_cases;

pub use use_cases::{
    login::{LOGIN_SUCCESSFUL, LoginUseCase},
    register::{RegisterUseCase, USER_CREATED},
};
