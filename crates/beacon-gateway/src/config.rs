//! Gateway configuration.
//!
//! Configuration can be loaded from:
//! - Environment variables (BEACON_*)
//! - TOML configuration file

use anyhow::{Context, Result};
use beacon_core::{NamespaceConfig, NamespaceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Full URL of the gateway server's command endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key for server commands.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// HMAC secret used to sign access tokens.
    #[serde(default = "default_token_secret")]
    pub token_secret: String,

    /// Request deadline for server commands, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Namespace configuration.
    #[serde(default)]
    pub namespaces: NamespacesConfig,
}

/// Namespace mode configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespacesConfig {
    /// Enable namespace remapping.
    #[serde(default)]
    pub enabled: bool,

    /// Namespace prefix for public channels.
    #[serde(default = "default_default_namespace")]
    pub default: String,

    /// Namespace prefix for private channels.
    #[serde(default = "default_private_namespace")]
    pub private: String,

    /// Namespace prefix for presence channels.
    #[serde(default = "default_presence_namespace")]
    pub presence: String,
}

// Default value functions
fn default_api_url() -> String {
    std::env::var("BEACON_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string())
}

fn default_api_key() -> String {
    std::env::var("BEACON_API_KEY").unwrap_or_default()
}

fn default_token_secret() -> String {
    std::env::var("BEACON_TOKEN_SECRET").unwrap_or_default()
}

fn default_timeout_ms() -> u64 {
    3_000
}

fn default_default_namespace() -> String {
    "public:".to_string()
}

fn default_private_namespace() -> String {
    "private:".to_string()
}

fn default_presence_namespace() -> String {
    "presence:".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: default_api_key(),
            token_secret: default_token_secret(),
            timeout_ms: default_timeout_ms(),
            namespaces: NamespacesConfig::default(),
        }
    }
}

impl Default for NamespacesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            default: default_default_namespace(),
            private: default_private_namespace(),
            presence: default_presence_namespace(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from file or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        // Try to load from default paths
        let config_paths = [
            "beacon.toml",
            "/etc/beacon/beacon.toml",
            "~/.config/beacon/beacon.toml",
        ];

        for path in &config_paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::from_file(expanded.as_ref());
            }
        }

        // Fall back to defaults with environment overrides
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: GatewayConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// The request deadline for server commands.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build the namespace configuration, if namespace mode is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured prefixes are empty or collide.
    pub fn namespace_config(&self) -> Result<Option<NamespaceConfig>, NamespaceError> {
        if !self.namespaces.enabled {
            return Ok(None);
        }

        NamespaceConfig::new(
            self.namespaces.default.as_str(),
            self.namespaces.private.as_str(),
            self.namespaces.presence.as_str(),
        )
        .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.timeout_ms, 3_000);
        assert!(!config.namespaces.enabled);
        assert!(config.namespace_config().unwrap().is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            api_url = "http://gateway.internal:8000/api"
            api_key = "k1"
            token_secret = "s1"

            [namespaces]
            enabled = true
            default = "ns:"
            private = "ns-priv:"
            presence = "ns-pres:"
        "#;

        let config: GatewayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_url, "http://gateway.internal:8000/api");
        assert_eq!(config.api_key, "k1");

        let ns = config.namespace_config().unwrap().unwrap();
        assert_eq!(ns.default_prefix(), "ns:");
        assert_eq!(ns.private_prefix(), "ns-priv:");
        assert_eq!(ns.presence_prefix(), "ns-pres:");
    }

    #[test]
    fn test_colliding_namespaces_rejected() {
        let toml_str = r#"
            [namespaces]
            enabled = true
            default = "same:"
            private = "same:"
        "#;

        let config: GatewayConfig = toml::from_str(toml_str).unwrap();
        assert!(config.namespace_config().is_err());
    }

    #[test]
    fn test_timeout_conversion() {
        let config = GatewayConfig {
            timeout_ms: 250,
            ..GatewayConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }
}
