//! Configuration for the dashboard

use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr};

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Backend API settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the product collection resource
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub environment: Environment,
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = env_or_default("API_BASE_URL", domain_catalog::DEFAULT_BASE_URL);
        let timeout_secs: u64 = env_or_default("API_TIMEOUT_SECS", "30")
            .parse()
            .wrap_err("API_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            environment: Environment::from_env(),
        })
    }
}
