//! Gateway configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Gateway configuration
///
/// Missing keys fall back to [`GatewayConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Clamp the typed shock index to [0, 2] while the user types
    pub clamp_shock_index: bool,

    /// Clamp the typed TIMI score to [0, 14] while the user types
    pub clamp_timi: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            clamp_shock_index: true,
            clamp_timi: true,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env`, `config/gateway.*` and `MIRI_*`
    /// environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/gateway").required(false))
            .add_source(config::Environment::with_prefix("MIRI"));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        builder
            .build()
            .context("Failed to read gateway configuration")?
            .try_deserialize()
            .context("Failed to deserialize gateway configuration")
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
