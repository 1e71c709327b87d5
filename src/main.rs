//! CLI entry point for the proxy environment bridge

use clap::{Parser, Subcommand};
use rust_proxy_env::{
    cli::{CheckArgs, RunArgs, ShowArgs},
    init_logger_with_env, log_error, ProxySettings,
};

#[derive(Parser)]
#[command(name = "rust-proxy-env")]
#[command(about = "Resolve proxy settings and publish them to the process environment")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a proxy settings YAML file (defaults to proxy.yml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved proxy URL
    #[command(name = "show")]
    Show(ShowArgs),

    /// Run a command with the proxy environment applied
    #[command(name = "run")]
    Run(RunArgs),

    /// Verify connectivity through the configured proxy
    #[command(name = "check")]
    Check(CheckArgs),
}

fn load_settings(cli: &Cli) -> anyhow::Result<ProxySettings> {
    match &cli.config {
        Some(path) => {
            let mut settings = ProxySettings::from_yaml_file(path)?;
            settings.apply_env_overrides();
            Ok(settings)
        }
        None => ProxySettings::load_config(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on CLI arguments
    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &cli.log_level);
    }

    init_logger_with_env();

    let settings = load_settings(&cli).unwrap_or_else(|e| {
        log_error!("Failed to load proxy settings: {}", e);
        std::process::exit(1);
    });

    match cli.command {
        Commands::Show(args) => args.run(settings)?,
        Commands::Run(args) => {
            let code = args.run(settings)?;
            std::process::exit(code);
        }
        Commands::Check(args) => args.run(settings).await?,
    }

    Ok(())
}
