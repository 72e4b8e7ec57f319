//! GlowLink - Neewer GL1 studio light control
//!
//! Command-line tool for exercising a GL-series fixture over UDP: connect,
//! toggle power, set brightness and color temperature, run a scripted test
//! sequence.

mod logging_setup;
mod menu;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glowlink_core::config::{DeviceConfig, DEFAULT_PORT};
use glowlink_core::logging::LogConfig;
use tracing::info;

/// Interactive test tool for Neewer GL-series lights.
#[derive(Parser, Debug)]
#[command(name = "glowlink", version, about)]
struct Args {
    /// IPv4 address of the fixture (omit when --config is given)
    host: Option<String>,

    /// Destination UDP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// YAML device config file (takes precedence over host/port)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_config = LogConfig {
        level: args.log_level.clone(),
        ..LogConfig::default()
    };
    let _log_guard = logging_setup::init(&log_config)?;

    let config = match &args.config {
        Some(path) => DeviceConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let Some(host) = args.host.clone() else {
                bail!("Provide the fixture's IPv4 address or --config <file>");
            };
            let mut config = DeviceConfig::new(host);
            config.port = args.port;
            config.validate().context("Invalid fixture address")?;
            config
        }
    };

    let host = config.host_addr()?;
    info!("Target fixture: {} at {}:{}", config.name, host, config.port);

    menu::run(&config.name, host, config.port).await
}
