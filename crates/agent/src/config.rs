//! Agent configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `OPENAI_API_KEY` - `OpenAI` API key used for the translation call
//!
//! ## Optional
//! - `AGENT_DATABASE_URL` - Path to the demo SQLite file (default: company_db.db)
//! - `AGENT_HOST` - Bind address (default: 127.0.0.1)
//! - `AGENT_PORT` - Listen port (default: 3000)
//! - `OPENAI_MODEL` - Model ID (default: gpt-4o-mini)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Agent application configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Path to the demo SQLite database file
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// `OpenAI` API configuration
    pub openai: OpenAiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// `OpenAI` API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct OpenAiConfig {
    /// `OpenAI` API key
    pub api_key: SecretString,
    /// Model ID (e.g., gpt-4o-mini)
    pub model: String,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_env_or_default("AGENT_DATABASE_URL", "company_db.db");
        let host = get_env_or_default("AGENT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("AGENT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("AGENT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("AGENT_PORT".to_string(), e.to_string()))?;

        let openai = OpenAiConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            openai,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl OpenAiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: get_required_secret("OPENAI_API_KEY")?,
            model: get_env_or_default("OPENAI_MODEL", "gpt-4o-mini"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AgentConfig {
            database_url: "company_db.db".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            openai: OpenAiConfig {
                api_key: SecretString::from("sk-test"),
                model: "gpt-4o-mini".to_string(),
            },
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_openai_config_debug_redacts_key() {
        let config = OpenAiConfig {
            api_key: SecretString::from("sk-super-secret"),
            model: "gpt-4o-mini".to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("gpt-4o-mini"));
        assert!(!debug_output.contains("sk-super-secret"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: OPENAI_API_KEY"
        );
    }
}
