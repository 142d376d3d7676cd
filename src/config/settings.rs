/*
* Configuration, layered from lowest to highest priority:
* 1. hardcoded defaults
* 2. config/default.toml
* 3. config/local.toml (optional, environment-specific)
* 4. environment variables with the APP_ prefix
*/

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());

        info!("Loading configuration from path: {}", config_path);

        let config = Config::builder()
            // Start with default settings
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Add configuration from files
            .add_source(File::with_name(&format!("{}/default", config_path)).required(false))
            .add_source(File::with_name(&format!("{}/local", config_path)).required(false))
            // Add environment variables with prefix "APP_"
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        config.try_deserialize()
    }
}
