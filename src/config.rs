use crate::error::{config::ConfigError, AppError};

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_SYSTEM_COMPANY_NAME: &str = "Members Fleet";
const DEFAULT_SYSTEM_USER_EMAIL: &str = "system@members-fleet.local";

pub struct Config {
    pub database_url: String,
    pub log_filter: String,
    pub sqlx_logging: bool,

    /// Display name of the SYSTEM company that hosts member cars.
    pub system_company_name: String,
    /// Email of the ADMIN account owning the SYSTEM company.
    pub system_user_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            log_filter: env_or("LOG_FILTER", DEFAULT_LOG_FILTER),
            sqlx_logging: parse_bool("SQLX_LOGGING", false)?,
            system_company_name: env_or("SYSTEM_COMPANY_NAME", DEFAULT_SYSTEM_COMPANY_NAME),
            system_user_email: env_or("SYSTEM_USER_EMAIL", DEFAULT_SYSTEM_USER_EMAIL),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
