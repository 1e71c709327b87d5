//! Rust Proxy Env - proxy settings resolution and environment propagation
//!
//! This library resolves user-supplied proxy settings into a canonical
//! proxy URL and publishes it into the process-wide `HTTP_PROXY`/
//! `HTTPS_PROXY` environment variables (both casings), so that every
//! downstream HTTP library honoring the convention routes traffic through
//! the proxy with no explicit wiring.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod utils;

// Re-export commonly used items
pub use client::{ClientConfig, SharedHttpClient};
pub use config::{ProxySettings, SettingsSource, SharedSettings};
pub use error::{Error, Result};
pub use logging::init_logger_with_env;
pub use resolver::{
    resolve_proxy_url, EnvPublisher, ProxyPublisher, ProxyResolver, DEFAULT_PROXY_PORT,
    PROXY_ENV_KEYS,
};
pub use utils::{parse_proxy_url, ProxyUrlParts};
