//! # Remote Gateway
//!
//! The capability the TUI needs from the alias service: fetch every alias,
//! enable one, disable one. The event loop only sees the [`AliasGateway`]
//! trait, so tests can swap in a fake.

mod addy;

pub use addy::{AddyClient, DEFAULT_BASE_URL};

use std::fmt;

use async_trait::async_trait;

use crate::core::alias::AliasRecord;

/// A failed remote call. Every variant is fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport failure (DNS, connection refused, TLS, timeout).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GatewayError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

#[async_trait]
pub trait AliasGateway: Send + Sync {
    /// Returns every alias on the account, in the service's order.
    async fn fetch_all(&self) -> Result<Vec<AliasRecord>, GatewayError>;

    async fn enable(&self, id: &str) -> Result<(), GatewayError>;

    async fn disable(&self, id: &str) -> Result<(), GatewayError>;
}
