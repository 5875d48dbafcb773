//! Configuration for MailCheck

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `MAILCHECK__SERVER__PORT=9090`
const ENV_PREFIX: &str = "MAILCHECK";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// DNS resolver configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the check endpoint
    #[serde(default = "default_check_path")]
    pub check_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            check_path: default_check_path(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_check_path() -> String {
    "/form".to_string()
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Origin`
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

fn default_allowed_origin() -> String {
    "*".to_string()
}

/// DNS resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsConfig {
    /// Build the resolver from the host's resolver configuration
    #[serde(default = "default_use_system_config")]
    pub use_system_config: bool,

    /// Per-query timeout override in seconds; resolver default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Attempts override; resolver default when unset
    #[serde(default)]
    pub attempts: Option<usize>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            use_system_config: default_use_system_config(),
            timeout_secs: None,
            attempts: None,
        }
    }
}

fn default_use_system_config() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "json" or "text"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load configuration from defaults, an optional file and the environment
    ///
    /// When `path` is `None` the default locations are tried in order. A
    /// missing file is not an error; every field has a default.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_existing(&Self::default_locations()),
        };

        let mut builder = config::Config::builder();
        if let Some(file) = &file {
            tracing::debug!(path = %file.display(), "Reading configuration file");
            builder =
                builder.add_source(config::File::from(file.as_path()).required(path.is_some()));
        }

        let config: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| crate::Error::Config(format!("Failed to load config: {}", e)))?;

        Ok(config)
    }

    fn default_locations() -> [PathBuf; 2] {
        [
            PathBuf::from("./mailcheck.toml"),
            PathBuf::from("/etc/mailcheck/config.toml"),
        ]
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::Config("server.port must not be 0".to_string()));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(crate::Error::Config(
                "server.bind_address must not be empty".to_string(),
            ));
        }
        if !self.server.check_path.starts_with('/') {
            return Err(crate::Error::Config(format!(
                "server.check_path must start with '/': {}",
                self.server.check_path
            )));
        }
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(crate::Error::Config(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                other
            ))),
        }
    }
}

/// First candidate that exists on disk
fn find_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}
