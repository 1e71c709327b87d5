//! Proxy CLI commands

use crate::client::{ClientConfig, SharedHttpClient};
use crate::config::ProxySettings;
use crate::log_info;
use crate::resolver::ProxyResolver;
use crate::utils::parse_proxy_url;
use anyhow::{Context, Result};
use clap::Args;
use std::process::Command;

/// Print the resolved proxy URL for the current settings
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Print only the URL, without the parsed breakdown
    #[arg(long)]
    pub quiet: bool,
}

impl ShowArgs {
    pub fn run(&self, settings: ProxySettings) -> Result<()> {
        let resolver = ProxyResolver::new(settings);

        match resolver.resolve() {
            Some(url) => {
                println!("{}", url);
                if !self.quiet {
                    let parts = parse_proxy_url(&url)?;
                    eprintln!("  scheme:   {}", parts.scheme);
                    eprintln!("  host:     {}", parts.host);
                    if let Some(port) = parts.port {
                        eprintln!("  port:     {}", port);
                    }
                    if let Some(username) = &parts.username {
                        eprintln!("  username: {}", username);
                        eprintln!("  password: (set)");
                    }
                }
            }
            None => {
                eprintln!("no proxy configured");
            }
        }

        Ok(())
    }
}

/// Run a command with the proxy environment applied
///
/// Propagates the resolved proxy into this process's environment and
/// spawns the command, which inherits it. Media tools, package managers,
/// anything honoring `HTTP_PROXY`/`HTTPS_PROXY` picks the proxy up
/// without flags of its own.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command and arguments to run
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    pub fn run(&self, settings: ProxySettings) -> Result<i32> {
        let resolver = ProxyResolver::new(settings);
        resolver.initialize();

        let (program, args) = self
            .command
            .split_first()
            .context("No command given")?;

        log_info!("Running {} with proxy environment applied", program);

        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run command: {}", program))?;

        Ok(status.code().unwrap_or(1))
    }
}

/// Verify connectivity through the configured proxy
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// URL fetched for the connectivity check
    #[arg(long, default_value = "https://www.gstatic.com/generate_204")]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl CheckArgs {
    pub async fn run(&self, settings: ProxySettings) -> Result<()> {
        let resolver = ProxyResolver::new(settings);
        resolver.initialize();

        match resolver.resolve() {
            Some(url) => log_info!("Checking connectivity through {}", url),
            None => log_info!("No proxy configured, checking direct connectivity"),
        }

        // Built after propagation so it observes the refreshed environment
        let config = ClientConfig {
            request_timeout: std::time::Duration::from_secs(self.timeout),
            ..ClientConfig::default()
        };
        let client = SharedHttpClient::new(config)?;

        let response = client
            .handle()
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.url))?;

        log_info!("GET {} -> {}", self.url, response.status());

        if response.status().is_client_error() || response.status().is_server_error() {
            anyhow::bail!("Connectivity check failed with status {}", response.status());
        }

        println!("ok ({})", response.status());
        Ok(())
    }
}
