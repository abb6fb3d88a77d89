//! Configuration management for the MCP server.
//!
//! Settings come from environment variables (optionally via a `.env` file)
//! layered over built-in defaults. The ECM base URL is the only setting
//! without a usable default; [`Config::validate`] rejects a blank one.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification reported to clients.
    pub server: ServerConfig,

    /// Protocol version and advertised capabilities.
    pub protocol: ProtocolConfig,

    pub logging: LoggingConfig,

    pub transport: TransportConfig,

    /// Connection settings for the ECM REST API.
    pub ecm: EcmApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "ecm-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// MCP protocol revision answered to `initialize`.
    pub version: String,
    pub capabilities: Capabilities,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            version: "2024-11-05".to_string(),
            capabilities: Capabilities::default(),
        }
    }
}

/// Capability flags advertised on `initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub tools: bool,
    pub prompts: bool,
    pub resources: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            tools: true,
            prompts: false,
            resources: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// ECM REST API connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct EcmApiConfig {
    pub base_url: String,

    /// Basic-auth user, used when no API key is set.
    pub username: Option<String>,
    pub password: Option<String>,

    /// Sent as `X-API-Key`; takes precedence over basic auth.
    pub api_key: Option<String>,

    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,

    /// Retries after the first attempt for transient failures.
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

impl Default for EcmApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: None,
            password: None,
            api_key: None,
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
            max_retries: 3,
            retry_backoff_ms: 1000,
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for EcmApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcmApiConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("read_timeout_secs", &self.read_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_number<T: std::str::FromStr + std::fmt::Display + Copy>(key: &str, default: T) -> T {
    match env_string(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = env_string("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(version) = env_string("MCP_PROTOCOL_VERSION") {
            config.protocol.version = version;
        }

        if let Some(level) = env_string("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        let ecm = &mut config.ecm;
        if let Some(base_url) = env_string("ECM_API_BASE_URL") {
            ecm.base_url = base_url;
        }
        ecm.username = env_string("ECM_API_USERNAME");
        ecm.password = env_string("ECM_API_PASSWORD");
        ecm.api_key = env_string("ECM_API_KEY");
        ecm.connect_timeout_secs =
            env_number("ECM_API_CONNECT_TIMEOUT_SECS", ecm.connect_timeout_secs);
        ecm.read_timeout_secs = env_number("ECM_API_READ_TIMEOUT_SECS", ecm.read_timeout_secs);
        ecm.max_retries = env_number("ECM_API_MAX_RETRIES", ecm.max_retries);
        ecm.retry_backoff_ms = env_number("ECM_API_RETRY_BACKOFF_MS", ecm.retry_backoff_ms);

        if ecm.api_key.is_some() {
            info!("ECM API key loaded from environment");
        } else if ecm.username.is_some() {
            info!("ECM basic authentication configured for user {:?}", ecm.username);
        } else {
            warn!("No ECM credentials set (ECM_API_KEY or ECM_API_USERNAME)");
        }

        config
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.ecm.base_url.trim().is_empty() {
            return Err(Error::config("ECM_API_BASE_URL must be set"));
        }
        if self.ecm.username.is_some() && self.ecm.password.is_none() && self.ecm.api_key.is_none()
        {
            warn!("ECM_API_USERNAME is set without ECM_API_PASSWORD");
        }
        Ok(())
    }
}
