//! Output adapters for resolved proxy state

use tracing::info;

/// Environment keys covering both casing conventions for HTTP and HTTPS
/// traffic. Always written or removed as a set, never partially.
pub const PROXY_ENV_KEYS: [&str; 4] = ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy"];

/// Destination for resolved proxy state
///
/// The process environment is the default adapter, but the resolver does
/// not treat it as the source of truth; tests and embedders can supply
/// their own publisher.
pub trait ProxyPublisher: Send + Sync {
    /// Make the resolved URL visible to downstream network code
    fn publish(&self, url: &str);

    /// Remove any previously published proxy state
    fn clear(&self);
}

/// Publishes the resolved proxy URL into the process environment
///
/// Affects every HTTP library honoring the `HTTP_PROXY`/`HTTPS_PROXY`
/// convention, in either casing, without additional wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPublisher;

impl ProxyPublisher for EnvPublisher {
    fn publish(&self, url: &str) {
        for key in PROXY_ENV_KEYS {
            std::env::set_var(key, url);
        }
        info!("Proxy published to environment: {}", url);
    }

    fn clear(&self) {
        for key in PROXY_ENV_KEYS {
            if std::env::var_os(key).is_some() {
                std::env::remove_var(key);
            }
        }
        info!("Proxy environment variables cleared");
    }
}
