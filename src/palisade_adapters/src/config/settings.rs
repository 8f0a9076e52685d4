use std::env;
use std::str::FromStr;

use crate::config::constants;

/// Runtime configuration, sourced from the environment with production
/// defaults. Loading `.env` files is the binary's job, not this module's.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub redis: RedisSettings,
    pub hashing: HashingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct RedisSettings {
    pub host_name: String,
}

/// Argon2 cost parameters. The defaults are the service's fixed work factor;
/// deployments tune them through the environment.
#[derive(Debug, Clone, Copy)]
pub struct HashingSettings {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            m_cost: 15000,
            t_cost: 2,
            p_cost: 1,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let hashing_defaults = HashingSettings::default();

        Self {
            server: ServerSettings {
                address: env_or(
                    constants::env::SERVER_ADDRESS_ENV_VAR,
                    constants::prod::APP_ADDRESS,
                ),
            },
            redis: RedisSettings {
                host_name: env_or(
                    constants::env::REDIS_HOST_NAME_ENV_VAR,
                    constants::prod::REDIS_HOST_NAME,
                ),
            },
            hashing: HashingSettings {
                m_cost: env_parse(constants::env::ARGON2_M_COST_ENV_VAR, hashing_defaults.m_cost),
                t_cost: env_parse(constants::env::ARGON2_T_COST_ENV_VAR, hashing_defaults.t_cost),
                p_cost: env_parse(constants::env::ARGON2_P_COST_ENV_VAR, hashing_defaults.p_cost),
            },
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_owned())
}

fn env_parse<T: FromStr>(var: &str, default: T) -> T {
    env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
