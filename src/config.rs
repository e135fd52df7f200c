//! Configuration management for hadley.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{HadleyError, Result};

/// Command-line arguments for hadley
#[derive(Parser, Debug)]
#[command(name = "hadley")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "HADLEY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Object storage bucket to archive weather data into
    #[arg(short, long, env = "GCS_BUCKET_NAME")]
    pub bucket: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "HADLEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "HADLEY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Object storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Target bucket. Absence does not abort startup; it disables every
    /// bucket-dependent endpoint with a fixed 500 instead.
    #[serde(default)]
    pub bucket: Option<String>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Object storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        let args = Args::parse();

        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments / environment
        config.server.host = args.host;
        config.server.port = args.port;
        if args.bucket.is_some() {
            config.storage.bucket = args.bucket;
        }
        config.log_level = args.log_level;

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server.host = other.server.host;
        self.server.port = other.server.port;
        if other.storage.bucket.is_some() {
            self.storage.bucket = other.storage.bucket;
        }
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate server host (must be a valid IP or hostname)
        if self.server.host.is_empty() {
            return Err(HadleyError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(HadleyError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(HadleyError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // A missing bucket is deliberately NOT a validation error: the
        // process must come up and answer the index route regardless.

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.bucket, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = Config::default();
        let mut config2 = Config::default();

        config2.server.port = 9000;
        config2.storage.bucket = Some("weather-archive".to_string());

        config1.merge(config2);

        assert_eq!(config1.server.port, 9000);
        assert_eq!(
            config1.storage.bucket,
            Some("weather-archive".to_string())
        );
    }

    #[test]
    fn test_merge_keeps_existing_bucket() {
        let mut config1 = Config::default();
        config1.storage.bucket = Some("weather-archive".to_string());

        config1.merge(Config::default());

        assert_eq!(
            config1.storage.bucket,
            Some("weather-archive".to_string())
        );
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        let config = Config::default();
        assert!(config.validate().is_ok());

        // Test invalid host
        let mut config = Config::default();
        config.server.host = "".to_string();
        assert!(config.validate().is_err());

        // Test invalid port
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        // Test invalid log level
        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_bucket_is_valid() {
        let config = Config::default();
        assert!(config.storage.bucket.is_none());
        assert!(config.validate().is_ok());
    }
}
