pub mod env {
    pub const SERVER_ADDRESS_ENV_VAR: &str = "SERVER_ADDRESS";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const ARGON2_M_COST_ENV_VAR: &str = "ARGON2_M_COST";
    pub const ARGON2_T_COST_ENV_VAR: &str = "ARGON2_T_COST";
    pub const ARGON2_P_COST_ENV_VAR: &str = "ARGON2_P_COST";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
