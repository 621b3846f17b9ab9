//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::alias::AliasRecord;
use crate::gateway::{AliasGateway, GatewayError};

/// A no-op gateway for tests that don't need real API calls.
pub struct NoopGateway;

#[async_trait]
impl AliasGateway for NoopGateway {
    async fn fetch_all(&self) -> Result<Vec<AliasRecord>, GatewayError> {
        Ok(Vec::new())
    }

    async fn enable(&self, _id: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn disable(&self, _id: &str) -> Result<(), GatewayError> {
        Ok(())
    }
}

/// Creates a test App with a NoopGateway.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopGateway))
}

/// An alias with zeroed counters and no description.
pub fn alias(id: &str, email: &str, active: bool) -> AliasRecord {
    AliasRecord {
        id: id.to_string(),
        email: email.to_string(),
        description: None,
        active,
        emails_forwarded: 0,
        emails_blocked: 0,
        emails_replied: 0,
        emails_sent: 0,
    }
}
