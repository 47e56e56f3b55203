//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `AMOURA_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_MATCH_THRESHOLD;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `AMOURA_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the pretrained model artifacts. Default: `./ml_models`.
    pub models_dir: PathBuf,

    /// Directory holding per-user record files for the JSON store.
    /// Default: `./data/users`.
    pub data_dir: PathBuf,

    /// Match probability threshold; survivors must score strictly above it.
    /// Default: `0.5`.
    pub match_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            models_dir: PathBuf::from("./ml_models"),
            data_dir: PathBuf::from("./data/users"),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "AMOURA_PORT";
    const ENV_BIND_ADDR: &'static str = "AMOURA_BIND_ADDR";
    const ENV_MODELS_DIR: &'static str = "AMOURA_MODELS_DIR";
    const ENV_DATA_DIR: &'static str = "AMOURA_DATA_DIR";
    const ENV_MATCH_THRESHOLD: &'static str = "AMOURA_MATCH_THRESHOLD";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let models_dir = Self::parse_path_from_env(Self::ENV_MODELS_DIR, defaults.models_dir);
        let data_dir = Self::parse_path_from_env(Self::ENV_DATA_DIR, defaults.data_dir);
        let match_threshold = Self::parse_threshold_from_env(defaults.match_threshold)?;

        Ok(Self {
            port,
            bind_addr,
            models_dir,
            data_dir,
            match_threshold,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models_dir.exists() && !self.models_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.models_dir.clone(),
            });
        }

        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.data_dir.clone(),
            });
        }

        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.match_threshold,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_threshold_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_MATCH_THRESHOLD) {
            Ok(value) => {
                let threshold: f64 =
                    value
                        .parse()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::InvalidThreshold { value: threshold });
                }

                Ok(threshold)
            }
            Err(_) => Ok(default),
        }
    }
}
