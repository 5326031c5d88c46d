use std::net::SocketAddr;

use serde::Deserialize;

use marquee_core::error::{MarqueeError, Result};
use marquee_core::AggregatorConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub metrics: AggregatorConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MarqueeError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.metrics.validate()?;

        if !(1..=100_000).contains(&self.metrics.window_capacity) {
            return Err(MarqueeError::BadRequest(
                "metrics.window_capacity must be between 1 and 100000".into(),
            ));
        }
        if !(1..=100).contains(&self.metrics.top_n) {
            return Err(MarqueeError::BadRequest(
                "metrics.top_n must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            MarqueeError::BadRequest(format!("gateway.listen is not a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
