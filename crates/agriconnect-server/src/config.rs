//! Configuration for the AgriConnect server.

use anyhow::{Context, Result};
use serde::Deserialize;
use session_store::PasswordPolicy;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Session storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Credential handling
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Assistant configuration
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the session files
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    /// Enable persistence (if false, sessions are in-memory only)
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// Store SHA-256 digests instead of plaintext passwords
    #[serde(default)]
    pub hash_passwords: bool,
}

impl CredentialsConfig {
    pub fn policy(&self) -> PasswordPolicy {
        if self.hash_passwords {
            PasswordPolicy::Sha256
        } else {
            PasswordPolicy::Plaintext
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Answer only from the offline table
    #[serde(default)]
    pub offline: bool,

    /// Artificial delay before each reply
    #[serde(default = "default_reply_delay", with = "humantime_serde")]
    pub reply_delay: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Address to bind. An unparsable `listen_addr` falls back to loopback.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self.listen_addr.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid listen address {:?} ({}), falling back to 127.0.0.1",
                self.listen_addr, e
            );
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        });
        SocketAddr::new(ip, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            persist: true,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            offline: false,
            reply_delay: default_reply_delay(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_storage_path() -> PathBuf {
    PathBuf::from("/data/agriconnect")
}

fn default_true() -> bool {
    true
}

fn default_reply_delay() -> Duration {
    Duration::ZERO
}

fn default_listen_addr() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_source() {
        let config: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.storage.persist);
        assert_eq!(config.storage.path, PathBuf::from("/data/agriconnect"));
        assert_eq!(config.credentials.policy(), PasswordPolicy::Plaintext);
        assert!(!config.assistant.offline);
        assert_eq!(config.assistant.reply_delay, Duration::ZERO);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_overrides() {
        let config: Config = config::Config::builder()
            .set_override("credentials.hash_passwords", true)
            .unwrap()
            .set_override("assistant.reply_delay", "1500ms")
            .unwrap()
            .set_override("server.port", 9090)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.credentials.policy(), PasswordPolicy::Sha256);
        assert_eq!(config.assistant.reply_delay, Duration::from_millis(1500));
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            listen_addr: "0.0.0.0".into(),
            port: 9090,
        };
        assert_eq!(server.socket_addr(), "0.0.0.0:9090".parse().unwrap());

        let server = ServerConfig {
            listen_addr: "localhost".into(),
            port: 8080,
        };
        assert_eq!(server.socket_addr(), "127.0.0.1:8080".parse().unwrap());
    }
}
