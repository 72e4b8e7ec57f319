//! Device configuration.
//!
//! Fixtures are described by a small YAML document:
//!
//! ```yaml
//! name: Key Light
//! host: 192.168.1.100
//! port: 5052
//! ```
//!
//! `name` and `port` are optional and default to the values below. The
//! host must be a dotted-quad IPv4 address; validation happens before any
//! socket is opened.

use std::net::Ipv4Addr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default display name for a fixture.
pub const DEFAULT_NAME: &str = "Neewer GL25C";

/// Default UDP port the fixture listens on.
pub const DEFAULT_PORT: u16 = 5052;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Structurally valid config with an invalid value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Connection settings for one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display name of the fixture
    #[serde(default = "default_name")]
    pub name: String,
    /// IPv4 address of the fixture, dotted-quad form
    pub host: String,
    /// Destination UDP port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl DeviceConfig {
    /// Create a config for `host` with the default name and port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            host: host.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Load and validate a config from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a reachable fixture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "device name must not be empty".to_string(),
            ));
        }
        self.host_addr()?;
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// The host as a parsed IPv4 address.
    pub fn host_addr(&self) -> Result<Ipv4Addr, ConfigError> {
        self.host.parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "host {:?} is not a dotted-quad IPv4 address",
                self.host
            ))
        })
    }
}
