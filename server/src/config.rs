//! Configuration management

use agrochain_core::{Error, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "server/static";
const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 100;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// How many unmatched-route records the diagnostic sink keeps
    #[serde(default = "default_diagnostics_capacity")]
    pub diagnostics_capacity: usize,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}

fn default_diagnostics_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            diagnostics_capacity: default_diagnostics_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = if let Some(p) = path {
            Self::load_from_file(p)?
        } else {
            Self::load_from_env()?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| default_bind_addr());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir());

        let diagnostics_capacity = match std::env::var("DIAGNOSTICS_CAPACITY") {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => default_diagnostics_capacity(),
        };

        Ok(Config {
            bind_addr,
            static_dir,
            diagnostics_capacity,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.bind_addr.trim().is_empty() {
            return Err(Error::ConfigError("bind_addr cannot be empty".to_string()));
        }
        if self.diagnostics_capacity == 0 {
            return Err(Error::ConfigError(
                "diagnostics_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_capacity(raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|e| {
        Error::ConfigError(format!("Invalid DIAGNOSTICS_CAPACITY '{}': {}", raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_toml_overrides() {
        let config = Config::from_toml_str(
            r#"
            bind_addr = "127.0.0.1:3000"
            static_dir = "/srv/static"
            diagnostics_capacity = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.static_dir, "/srv/static");
        assert_eq!(config.diagnostics_capacity, 5);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("diagnostics_capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.diagnostics_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity(" 42 ").unwrap(), 42);
        assert!(parse_capacity("-1").is_err());
        assert!(parse_capacity("abc").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Some("/nonexistent/agrochain.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
