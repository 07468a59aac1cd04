//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::simulator::{RetentionPercent, PROCESSING_DELAY_MS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub simulator: SimulatorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Site host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI bundle (index.html + assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("neurolens-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Text-preview simulator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default)]
    pub default_retention: RetentionPercent,
}

fn default_delay_ms() -> u64 {
    PROCESSING_DELAY_MS as u64
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            default_retention: RetentionPercent::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("neurolens").join("config.toml")),
            Some(PathBuf::from("/etc/neurolens/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load an explicit path when given, otherwise search the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("NEUROLENS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("NEUROLENS_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid NEUROLENS_PORT: {}", port),
            }
        }
        if let Some(dist_dir) = var("NEUROLENS_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        // Simulator overrides
        if let Some(delay) = var("NEUROLENS_SIMULATOR_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.simulator.delay_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid NEUROLENS_SIMULATOR_DELAY_MS: {}", delay),
            }
        }

        // Logging overrides
        if let Some(level) = var("NEUROLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("NEUROLENS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# NeuroLens Configuration
#
# Environment variables override these settings:
# - NEUROLENS_HOST
# - NEUROLENS_PORT
# - NEUROLENS_DIST_DIR
# - NEUROLENS_SIMULATOR_DELAY_MS
# - NEUROLENS_LOG_LEVEL
# - NEUROLENS_LOG_FORMAT

[server]
# Site host address
host = "0.0.0.0"

# Site host port
port = 8084

# Directory with the built UI bundle (trunk build output)
dist_dir = "neurolens-ui/dist"

[simulator]
# Fixed processing delay for the text-preview simulator (ms)
delay_ms = 2000

# Initial summary length in percent (10-90, steps of 10)
default_retention = 50

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/neurolens/neurolens.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(config.server.dist_dir, PathBuf::from("neurolens-ui/dist"));
        assert_eq!(config.simulator.delay(), Duration::from_secs(2));
        assert_eq!(config.simulator.default_retention.get(), 50);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_generated_config_round_trips_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.server.dist_dir, defaults.server.dist_dir);
        assert_eq!(config.simulator.delay_ms, defaults.simulator.delay_ms);
        assert_eq!(config.simulator.default_retention, defaults.simulator.default_retention);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[simulator]\ndefault_retention = 30").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.simulator.default_retention.get(), 30);
        assert_eq!(config.simulator.delay_ms, 2000);
    }

    #[test]
    fn test_off_grid_retention_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulator]\ndefault_retention = 55").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/neurolens.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NEUROLENS_HOST", "127.0.0.1"),
            ("NEUROLENS_PORT", "9100"),
            ("NEUROLENS_DIST_DIR", "/srv/neurolens"),
            ("NEUROLENS_SIMULATOR_DELAY_MS", "250"),
            ("NEUROLENS_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:9100");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/neurolens"));
        assert_eq!(config.simulator.delay_ms, 250);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "NEUROLENS_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.server.port, 8084);
    }
}
