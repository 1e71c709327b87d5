//! Command-line interface for proxy inspection and environment application

pub mod commands;

pub use commands::*;
