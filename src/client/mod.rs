//! Shared HTTP client rebuilt on proxy changes
//!
//! `reqwest` reads the proxy environment once, when a client is built.
//! A long-lived client therefore keeps routing through whatever proxy was
//! configured at construction time. This module caches one client and
//! exposes [`SharedHttpClient::reset`] so a settings change can swap in a
//! client built against the refreshed environment.

use crate::error::Result;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{error, info};

/// Configuration for the shared HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,

    /// Total request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .user_agent(format!("rust-proxy-env/{}", env!("CARGO_PKG_VERSION")));

        // reqwest resolves system proxies once per process, so a rebuilt
        // client would not see a changed environment on its own. Read the
        // ambient variables explicitly instead.
        match current_proxy_from_env() {
            Some(url) => builder = builder.proxy(reqwest::Proxy::all(url)?),
            None => builder = builder.no_proxy(),
        }

        builder.build()
    }
}

/// First proxy URL found among the published environment keys
fn current_proxy_from_env() -> Option<String> {
    crate::resolver::PROXY_ENV_KEYS
        .iter()
        .find_map(|key| std::env::var(key).ok())
        .filter(|url| !url.is_empty())
}

struct Inner {
    config: ClientConfig,
    client: RwLock<reqwest::Client>,
}

/// Process-wide HTTP client handle
///
/// Cheap to clone; all clones share the same cached client. Register
/// `reset` as a rebuild hook on the resolver so every settings change
/// refreshes the transport.
#[derive(Clone)]
pub struct SharedHttpClient {
    inner: Arc<Inner>,
}

impl SharedHttpClient {
    /// Build the initial client against the current environment
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                client: RwLock::new(client),
            }),
        })
    }

    /// The cached client; clone-and-use, do not hold across a reset
    pub fn handle(&self) -> reqwest::Client {
        self.inner
            .client
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Rebuild the cached client so it picks up the current proxy
    /// environment. On a build failure the previous client stays in
    /// place.
    pub fn reset(&self) {
        match self.inner.config.build_client() {
            Ok(client) => {
                let mut guard = self
                    .inner
                    .client
                    .write()
                    .unwrap_or_else(|e| e.into_inner());
                *guard = client;
                info!("HTTP client rebuilt against refreshed proxy environment");
            }
            Err(e) => {
                error!("Failed to rebuild HTTP client, keeping previous one: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_shared_client_creation_and_reset() {
        let shared = SharedHttpClient::new(ClientConfig::default()).unwrap();
        let _ = shared.handle();

        // Reset must leave a usable client behind
        shared.reset();
        let _ = shared.handle();
    }

    #[test]
    fn test_clones_share_the_cached_client() {
        let shared = SharedHttpClient::new(ClientConfig::default()).unwrap();
        let other = shared.clone();
        assert!(Arc::ptr_eq(&shared.inner, &other.inner));
    }
}
