//! Configuration handling for tier_schema

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::{Error, Result};
use crate::schema::types::TableDescriptor;
use crate::schema::SchemaRegistry;

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete tier_schema configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub logging: Option<LoggingConfig>,
    /// Optional table descriptors overriding the compiled-in registry.
    pub tables: Option<Vec<TableDescriptor>>,
}

impl Config {
    /// Build the schema registry: the configured tables if present, otherwise
    /// the application's compiled-in set.
    pub fn registry(&self) -> SchemaRegistry {
        match &self.tables {
            Some(tables) => SchemaRegistry::new(tables.clone()),
            None => SchemaRegistry::application_default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub stdout: bool,
}
