//! Utility functions for the proxy environment bridge

pub mod url;

pub use url::*;
