use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::transport::TransportConfig;

const LOCAL_CONFIG_PATH: &str = "dns-transport.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-transport/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub transports: Vec<TransportConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-transport.toml in current directory
    /// 3. /etc/dns-transport/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Rejects empty or duplicate tags, empty addresses and unusable response addresses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for transport in &self.transports {
            if transport.tag.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Transport tag cannot be empty".to_string(),
                ));
            }
            if !seen.insert(transport.tag.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate transport tag '{}'",
                    transport.tag
                )));
            }
            if transport.address.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Transport '{}' has no address",
                    transport.tag
                )));
            }
            transport.inet4()?;
            transport.inet6()?;
        }

        Ok(())
    }

    pub fn transport(&self, tag: &str) -> Option<&TransportConfig> {
        self.transports.iter().find(|t| t.tag == tag)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
}
