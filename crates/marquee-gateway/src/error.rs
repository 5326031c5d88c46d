//! Startup / serving errors for the gateway binary.

use thiserror::Error;

use marquee_core::MarqueeError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("config: {0}")]
    Config(#[from] MarqueeError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
