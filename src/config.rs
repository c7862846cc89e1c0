//! Configuration management for the contacts web application.
//!
//! This module handles loading and validating configuration from environment variables,
//! optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contacts web application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host name or address to bind (default: "localhost")
    pub host: String,

    /// TCP port to bind (default: 8080)
    pub port: u16,

    /// Smallest page size a client may request (default: 10)
    pub page_size_min: usize,

    /// Largest page size a client may request (default: 50)
    pub page_size_max: usize,

    /// Whether to load the sample contacts at startup (default: true)
    pub seed_fixtures: bool,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `HOST`: Bind host (default: "localhost")
    /// - `PORT`: Bind port (default: 8080)
    /// - `PAGE_SIZE_MIN` / `PAGE_SIZE_MAX`: Page size bounds (default: 10 / 50)
    /// - `SEED_FIXTURES`: Load sample contacts (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = env::var("HOST")
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match env::var("PORT") {
            Ok(val) => val.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "PORT".to_string(),
                reason: format!("Must be a port number, got: {}", val),
            })?,
            Err(_) => defaults.port,
        };

        let page_size_min = Self::parse_env_usize("PAGE_SIZE_MIN", defaults.page_size_min)?;
        let page_size_max = Self::parse_env_usize("PAGE_SIZE_MAX", defaults.page_size_max)?;

        if page_size_min == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PAGE_SIZE_MIN".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        if page_size_min > page_size_max {
            return Err(ConfigError::InvalidValue {
                var: "PAGE_SIZE_MAX".to_string(),
                reason: format!("Must not be smaller than PAGE_SIZE_MIN ({})", page_size_min),
            });
        }

        let seed_fixtures = Self::parse_env_bool("SEED_FIXTURES", defaults.seed_fixtures);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            page_size_min,
            page_size_max,
            seed_fixtures,
            log_level,
        })
    }

    /// The `host:port` pair to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_bool(var_name: &str, default: bool) -> bool {
        match env::var(var_name) {
            Ok(v) => !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            ),
            Err(_) => default,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "localhost".to_string(),
            port: 8080,
            page_size_min: 10,
            page_size_max: 50,
            seed_fixtures: true,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 6] = [
        "HOST",
        "PORT",
        "PAGE_SIZE_MIN",
        "PAGE_SIZE_MAX",
        "SEED_FIXTURES",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.page_size_min, 10);
        assert_eq!(config.page_size_max, 50);
        assert!(config.seed_fixtures);
        assert_eq!(config.bind_address(), "localhost:8080");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("HOST", "0.0.0.0");
        guard.set("PORT", "3000");
        guard.set("PAGE_SIZE_MAX", "20");
        guard.set("SEED_FIXTURES", "off");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.page_size_min, 10);
        assert_eq!(config.page_size_max, 20);
        assert!(!config.seed_fixtures);
    }

    #[test]
    #[serial]
    fn test_config_blank_host_uses_default() {
        let mut guard = EnvGuard::new();
        guard.set("HOST", "  ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "localhost");
    }

    #[test]
    #[serial]
    fn test_config_invalid_port() {
        let mut guard = EnvGuard::new();
        guard.set("PORT", "99999");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "PORT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_page_bounds_must_be_ordered() {
        let mut guard = EnvGuard::new();
        guard.set("PAGE_SIZE_MIN", "30");
        guard.set("PAGE_SIZE_MAX", "20");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "PAGE_SIZE_MAX"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_min_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("PAGE_SIZE_MIN", "0");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        assert!(Config::parse_env_usize("TEST_USIZE_INVALID", 10).is_err());
        assert_eq!(Config::parse_env_usize("NONEXISTENT_USIZE", 10).unwrap(), 10);
    }
}
