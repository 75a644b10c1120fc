//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `LABMATCH_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_FALLBACK_TIMEOUT_MS;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `LABMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// JSON catalog loaded once at startup. Default: `./catalog.json`.
    pub catalog_path: PathBuf,

    /// Base URL of the semantic search service. Unset disables the fallback.
    pub fallback_url: Option<String>,

    /// Budget for one fallback call, in milliseconds. Default: `2000`.
    pub fallback_timeout_ms: u64,
}

/// Default catalog location used when `LABMATCH_CATALOG_PATH` is not set.
pub const DEFAULT_CATALOG_PATH: &str = "./catalog.json";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            fallback_url: None,
            fallback_timeout_ms: DEFAULT_FALLBACK_TIMEOUT_MS,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "LABMATCH_PORT";
    pub const ENV_BIND_ADDR: &'static str = "LABMATCH_BIND_ADDR";
    pub const ENV_CATALOG_PATH: &'static str = "LABMATCH_CATALOG_PATH";
    pub const ENV_FALLBACK_URL: &'static str = "LABMATCH_FALLBACK_URL";
    pub const ENV_FALLBACK_TIMEOUT_MS: &'static str = "LABMATCH_FALLBACK_TIMEOUT_MS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let catalog_path = Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let fallback_url = Self::parse_optional_string_from_env(Self::ENV_FALLBACK_URL);
        let fallback_timeout_ms =
            Self::parse_u64_from_env(Self::ENV_FALLBACK_TIMEOUT_MS, defaults.fallback_timeout_ms);

        Ok(Self {
            port,
            bind_addr,
            catalog_path,
            fallback_url,
            fallback_timeout_ms,
        })
    }

    /// Validates paths and basic invariants (touches nothing on disk).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.catalog_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.catalog_path.clone(),
            });
        }
        if !self.catalog_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.catalog_path.clone(),
            });
        }

        if let Some(ref url) = self.fallback_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidFallbackUrl { value: url.clone() });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    pub fn fallback_timeout(&self) -> Duration {
        Duration::from_millis(self.fallback_timeout_ms)
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
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
