use std::net::SocketAddr;

use crate::server::{error::config::ConfigError, service::github::GitHubConfig};

static DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
static DEFAULT_GITHUB_USER_AGENT: &str = "customers-api";
static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub github_api_url: String,
    pub github_user_agent: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = optional_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address =
            bind_address
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            github_api_url: optional_var("GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
            github_user_agent: optional_var("GITHUB_USER_AGENT", DEFAULT_GITHUB_USER_AGENT),
            bind_address,
        })
    }

    pub fn github(&self) -> GitHubConfig {
        GitHubConfig {
            base_url: self.github_api_url.clone(),
            user_agent: self.github_user_agent.clone(),
        }
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
