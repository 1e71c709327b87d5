//! Configuration for the proxy environment bridge

pub mod settings;

pub use settings::{ProxySettings, SettingsSource, SharedSettings};
