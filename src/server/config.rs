use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Every five minutes, at second zero.
const DEFAULT_PURCHASE_EXPIRY_SCHEDULE: &str = "0 */5 * * * *";
const DEFAULT_LOG_FILTER: &str = "info";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Six-field cron expression for the purchase expiry job.
    pub purchase_expiry_schedule: String,

    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            purchase_expiry_schedule: optional_var(
                "PURCHASE_EXPIRY_SCHEDULE",
                DEFAULT_PURCHASE_EXPIRY_SCHEDULE,
            ),
            log_filter: optional_var("RUST_LOG", DEFAULT_LOG_FILTER),
        })
    }
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
