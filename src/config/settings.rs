//! Proxy settings model and loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// User-supplied proxy configuration
///
/// Mirrors what a settings surface collects: an on/off switch, host,
/// scheme, port, and optional credentials. The port is kept as a string
/// because it arrives from free-form user input; resolution handles the
/// non-numeric case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxySettings {
    /// Whether the proxy is enabled at all
    #[serde(default)]
    pub enabled: bool,

    /// Proxy host (IP or hostname), may be empty
    #[serde(default)]
    pub host: String,

    /// Proxy scheme, case-insensitive (e.g. "http", "socks5")
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Proxy port as entered by the user
    #[serde(default = "default_port")]
    pub port: String,

    /// Optional proxy username
    #[serde(default)]
    pub username: String,

    /// Optional proxy password
    #[serde(default)]
    pub password: String,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_port() -> String {
    "7890".to_string()
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            host: String::new(),
            scheme: default_scheme(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl ProxySettings {
    /// Load settings from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let settings: ProxySettings = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(settings)
    }

    /// Load settings from `proxy.yml` with environment variable overrides
    ///
    /// A missing file is not an error: defaults are used so that the
    /// override variables alone can configure a proxy.
    pub fn load_config() -> Result<Self> {
        let config_path = "proxy.yml";

        let mut settings = if Path::new(config_path).exists() {
            Self::from_yaml_file(config_path)?
        } else {
            Self::default()
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Override individual fields from environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(enabled) = std::env::var("PROXY_ENABLED") {
            self.enabled = enabled.to_lowercase() == "true";
        }

        if let Ok(host) = std::env::var("PROXY_HOST") {
            self.host = host;
        }

        if let Ok(scheme) = std::env::var("PROXY_SCHEME") {
            self.scheme = scheme;
        }

        if let Ok(port) = std::env::var("PROXY_PORT") {
            self.port = port;
        }

        if let Ok(username) = std::env::var("PROXY_USERNAME") {
            self.username = username;
        }

        if let Ok(password) = std::env::var("PROXY_PASSWORD") {
            self.password = password;
        }
    }
}

/// Accessor for the current proxy settings
///
/// The resolver reads settings through this trait at call time instead of
/// reaching into a global configuration module, so the configuration store
/// stays the single source of truth and no snapshot goes stale.
pub trait SettingsSource: Send + Sync {
    /// Return the settings as they are right now
    fn snapshot(&self) -> ProxySettings;
}

impl SettingsSource for ProxySettings {
    fn snapshot(&self) -> ProxySettings {
        self.clone()
    }
}

/// Shared, mutable settings store
///
/// The settings-UI model: one handle lives with the settings surface and
/// is updated on save, a clone lives in the resolver and is read on every
/// propagation.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<ProxySettings>>,
}

impl SharedSettings {
    pub fn new(settings: ProxySettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replace the stored settings
    pub fn update(&self, settings: ProxySettings) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = settings;
    }
}

impl SettingsSource for SharedSettings {
    fn snapshot(&self) -> ProxySettings {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = ProxySettings::default();
        assert!(!settings.enabled);
        assert!(settings.host.is_empty());
        assert_eq!(settings.scheme, "http");
        assert_eq!(settings.port, "7890");
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "enabled: true\nhost: proxy.local\nscheme: socks5\nport: \"1080\""
        )
        .unwrap();

        let settings = ProxySettings::from_yaml_file(file.path()).unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.host, "proxy.local");
        assert_eq!(settings.scheme, "socks5");
        assert_eq!(settings.port, "1080");
        // Fields absent from the file take their defaults
        assert!(settings.username.is_empty());
        assert!(settings.password.is_empty());
    }

    #[test]
    fn test_from_yaml_file_missing() {
        assert!(ProxySettings::from_yaml_file("/nonexistent/proxy.yml").is_err());
    }

    #[test]
    fn test_shared_settings_update_visible_to_snapshot() {
        let shared = SharedSettings::new(ProxySettings::default());
        assert!(!shared.snapshot().enabled);

        let mut updated = ProxySettings::default();
        updated.enabled = true;
        updated.host = "1.2.3.4".to_string();
        shared.update(updated);

        let seen = shared.snapshot();
        assert!(seen.enabled);
        assert_eq!(seen.host, "1.2.3.4");
    }
}
