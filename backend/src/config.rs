//! Configuration management for the AquaFarm server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides, e.g. `AQUAFARM__SERVER__PORT`

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Text-generation API configuration
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Settings for the external text-generation endpoint
///
/// The API key only ever lives here; browsers reach the endpoint through
/// `POST /api/v1/generator/schedule`.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Full URL of the generate-content endpoint
    pub endpoint: String,

    /// API key, sent as the `key` query parameter
    pub api_key: String,

    pub temperature: f32,

    pub top_k: u32,

    pub top_p: f32,

    pub max_output_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

pub const DEFAULT_GENERATION_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AQUAFARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("generation.endpoint", DEFAULT_GENERATION_ENDPOINT)?
            .set_default("generation.api_key", "")?
            .set_default("generation.temperature", 0.7)?
            .set_default("generation.top_k", 40)?
            .set_default("generation.top_p", 0.95)?
            .set_default("generation.max_output_tokens", 1024)?
            .set_default("generation.timeout_secs", 60)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AQUAFARM__ prefix)
            .add_source(
                Environment::with_prefix("AQUAFARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GENERATION_ENDPOINT.to_string(),
            api_key: String::new(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            timeout_secs: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.generation.top_k, 40);
        assert_eq!(config.generation.max_output_tokens, 1024);
    }
}
