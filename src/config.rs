// src/config.rs

//! Manages service configuration: loading, applying defaults, and validation.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the built-in host used when no game server is embedding the service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StandaloneConfig {
    /// Ticks fired per second by the built-in host.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    /// Reported as `version` on the status endpoint.
    #[serde(default = "default_server_version")]
    pub server_version: String,
    /// Reported as `protocol` on the status endpoint.
    #[serde(default = "default_protocol_version")]
    pub protocol_version: i64,
}

impl Default for StandaloneConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            server_version: default_server_version(),
            protocol_version: default_protocol_version(),
        }
    }
}

fn default_tick_rate() -> u32 {
    20
}
fn default_server_version() -> String {
    "1.21.0".to_string()
}
fn default_protocol_version() -> i64 {
    686
}

/// A raw representation of the config file before validation.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_max_players_fallback")]
    max_players_fallback: u32,
    #[serde(default = "default_server_properties")]
    server_properties: String,
    #[serde(default)]
    standalone: StandaloneConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_players_fallback() -> u32 {
    100
}
fn default_server_properties() -> String {
    "server.properties".to_string()
}

/// The validated service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Reported as `maxPlayers` when the properties file cannot be read.
    pub max_players_fallback: u32,
    /// Path to the host's `server.properties` file.
    pub server_properties: String,
    #[serde(default)]
    pub standalone: StandaloneConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            max_players_fallback: default_max_players_fallback(),
            server_properties: default_server_properties(),
            standalone: StandaloneConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Creates a new `ServiceConfig` by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        Self::from_toml_str(&contents).with_context(|| format!("Invalid config file '{path}'"))
    }

    /// Like `from_file`, but falls back to the defaults when `path` does not exist.
    /// The returned flag is `true` when the defaults were used.
    pub fn load_or_default(path: &str) -> Result<(Self, bool)> {
        if Path::new(path).exists() {
            Ok((Self::from_file(path)?, false))
        } else {
            Ok((Self::default(), true))
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents).context("Failed to parse TOML")?;

        let config = ServiceConfig {
            host: raw.host,
            port: raw.port,
            log_level: raw.log_level,
            max_players_fallback: raw.max_players_fallback,
            server_properties: raw.server_properties,
            standalone: raw.standalone,
        };

        if config.port == 0 {
            return Err(anyhow!("port cannot be 0"));
        }
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("host cannot be empty"));
        }
        if !(1..=1000).contains(&self.standalone.tick_rate) {
            return Err(anyhow!(
                "standalone.tick_rate must be between 1 and 1000, got {}",
                self.standalone.tick_rate
            ));
        }
        Ok(())
    }

    /// Settings that are valid but probably unintended. Loading runs before logging
    /// is set up, so callers log these once a subscriber is installed.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.max_players_fallback == 0 {
            warnings.push(
                "max_players_fallback is 0; dashboards will report no capacity on fallback."
                    .to_string(),
            );
        }
        warnings
    }

    /// The `host:port` string the status server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
