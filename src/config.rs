//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{LineChart, ZPlane};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub charts: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analysis backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_backend_timeout() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_secs: default_backend_timeout(),
        }
    }
}

/// Dashboard web server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5173
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default chart dimensions in pixels
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_signal_width")]
    pub signal_width: u32,

    #[serde(default = "default_signal_height")]
    pub signal_height: u32,

    #[serde(default = "default_plane_size")]
    pub plane_size: u32,
}

fn default_signal_width() -> u32 {
    700
}

fn default_signal_height() -> u32 {
    350
}

fn default_plane_size() -> u32 {
    350
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            signal_width: default_signal_width(),
            signal_height: default_signal_height(),
            plane_size: default_plane_size(),
        }
    }
}

impl ChartConfig {
    pub fn line_chart(&self) -> LineChart {
        LineChart::new(f64::from(self.signal_width), f64::from(self.signal_height))
    }

    pub fn zplane(&self) -> ZPlane {
        let size = f64::from(self.plane_size);
        ZPlane::new(size, size)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate().map_err(|error| ConfigError::Invalid {
            path: path.to_path_buf(),
            error,
        })?;

        Ok(config)
    }

    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<(), String> {
        if self.backend.timeout_secs == 0 {
            return Err("backend.timeout_secs must be at least 1".to_string());
        }
        Ok(())
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
            dirs::config_dir().map(|p| p.join("ctg-monitor").join("config.toml")),
            Some(PathBuf::from("/etc/ctg-monitor/config.toml")),
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

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Backend overrides
        if let Some(url) = lookup("CTG_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Some(timeout) = lookup("CTG_BACKEND_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(t) if t > 0 => self.backend.timeout_secs = t,
                _ => tracing::warn!(value = %timeout, "Ignoring invalid CTG_BACKEND_TIMEOUT_SECS"),
            }
        }

        // Server overrides
        if let Some(host) = lookup("CTG_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CTG_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("CTG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CTG_LOG_FORMAT") {
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

    #[error("Invalid config file {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CTG Monitor Configuration
#
# Environment variables override these settings:
# - CTG_BACKEND_URL
# - CTG_BACKEND_TIMEOUT_SECS
# - CTG_HOST
# - CTG_PORT
# - CTG_LOG_LEVEL
# - CTG_LOG_FORMAT

[backend]
# Analysis backend URL
base_url = "http://127.0.0.1:8000"

# Request timeout in seconds
timeout_secs = 10

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 5173

# Allowed CORS origins (empty allows any)
cors_origins = []

[charts]
# Signal chart size (pixels)
signal_width = 700
signal_height = 350

# Pole-zero plot size (pixels, square)
plane_size = 350

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
