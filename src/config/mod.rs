//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SDG_CHAT_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sdg_chat_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod live_context;
mod server;
mod upstream;

pub use error::{ConfigError, ValidationError};
pub use live_context::LiveContextConfig;
pub use server::{Environment, ServerConfig};
pub use upstream::UpstreamConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream RAG completion service
    pub upstream: UpstreamConfig,

    /// Live-context augmentation (off unless a source URL is set)
    #[serde(default)]
    pub live_context: LiveContextConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SDG_CHAT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SDG_CHAT__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `SDG_CHAT__UPSTREAM__BASE_URL=...` -> `upstream.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SDG_CHAT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.upstream.validate()?;
        self.live_context.validate()?;
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var("SDG_CHAT__UPSTREAM__BASE_URL", "http://rag.test");
        env::set_var("SDG_CHAT__UPSTREAM__API_KEY", "ragflow-test-key");
        env::set_var("SDG_CHAT__UPSTREAM__CHAT_ID", "chat-test");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("SDG_CHAT__UPSTREAM__BASE_URL");
        env::remove_var("SDG_CHAT__UPSTREAM__API_KEY");
        env::remove_var("SDG_CHAT__UPSTREAM__CHAT_ID");
        env::remove_var("SDG_CHAT__SERVER__PORT");
        env::remove_var("SDG_CHAT__SERVER__ENVIRONMENT");
        env::remove_var("SDG_CHAT__LIVE_CONTEXT__SOURCE_URL");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.upstream.base_url, "http://rag.test");
        assert_eq!(config.upstream.chat_id, "chat-test");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(!config.live_context.is_enabled());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SDG_CHAT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.server.is_production());
        assert!(!config.server.allow_any_origin());
    }

    #[test]
    fn test_live_context_url_enables_feature() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var(
            "SDG_CHAT__LIVE_CONTEXT__SOURCE_URL",
            "https://news.example.org",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.live_context.is_enabled());
        assert_eq!(config.live_context.fetch_timeout_ms, 4000);
    }

    #[test]
    fn test_missing_upstream_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        assert!(result.is_err());
    }
}
