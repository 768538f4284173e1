use anyhow::{Context, Result};

/// API settings read from the environment (a `.env` file is honoured)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub session_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value.parse().context("PORT must be a number")?,
                Err(_) => 8080,
            },
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            admin_email: std::env::var("ADMIN_EMAIL").unwrap_or_default(),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH").unwrap_or_default(),
            session_ttl_hours: match std::env::var("SESSION_TTL_HOURS") {
                Ok(value) => value
                    .parse()
                    .context("SESSION_TTL_HOURS must be a number")?,
                Err(_) => 12,
            },
        })
    }
}
