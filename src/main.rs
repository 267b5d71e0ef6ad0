// src/main.rs

//! The main entry point for the tickstat status service.

use anyhow::Result;
use std::env;
use tickstat::config::ServiceConfig;
use tickstat::server;
use tracing::{error, warn};
use tracing_subscriber::{filter::EnvFilter, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) {
        println!("tickstat version {VERSION}");
        return Ok(());
    }

    // It can be provided via a --config flag; otherwise, it defaults to "tickstat.toml".
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
        .unwrap_or("tickstat.toml");

    let (mut config, used_defaults) = match ServiceConfig::load_or_default(config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration from \"{config_path}\": {e:#}");
            std::process::exit(1);
        }
    };

    if let Some(port_index) = args.iter().position(|arg| arg == "--port") {
        if let Some(port_str) = args.get(port_index + 1) {
            match port_str.parse::<u16>() {
                Ok(port) if port != 0 => config.port = port,
                _ => {
                    eprintln!("Invalid port number: {port_str}");
                    std::process::exit(1);
                }
            }
        } else {
            eprintln!("--port flag requires a value");
            std::process::exit(1);
        }
    }

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().compact().with_ansi(true))
        .init();

    if used_defaults {
        warn!("Config file '{}' not found; using built-in defaults.", config_path);
    }
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    // A bind failure lands here and aborts startup with a non-zero exit.
    if let Err(e) = server::run(config).await {
        error!("Server runtime error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
