use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_ENV: &str = "production";
const DEVELOPMENT_ENV: &str = "development";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub app_env: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first so values from a `.env` file are visible.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let raw_bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = parse_bind_address(&raw_bind_address)?;

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.to_string());

        Ok(Self {
            database_url,
            bind_address,
            app_env,
        })
    }

    /// Whether the OpenAPI document should be served.
    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case(DEVELOPMENT_ENV)
    }
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: "BIND_ADDRESS".to_string(),
        value: value.to_string(),
    })
}
