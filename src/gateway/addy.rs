//! addy.io REST implementation of [`AliasGateway`].
//!
//! Endpoints used:
//! - `GET    /api/v1/aliases`               → `{ "data": [alias, ...] }`
//! - `POST   /api/v1/active-aliases`        body `{ "id": "<id>" }`
//! - `DELETE /api/v1/active-aliases/{id}`   → 204

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::alias::AliasRecord;
use crate::gateway::{AliasGateway, GatewayError};

pub const DEFAULT_BASE_URL: &str = "https://app.addy.io";

#[derive(Deserialize, Debug)]
struct AliasesResponse {
    data: Vec<AliasRecord>,
}

#[derive(Serialize, Debug)]
struct ActivateRequest<'a> {
    id: &'a str,
}

pub struct AddyClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl AddyClient {
    pub fn new(token: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}/api/v1/{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        debug!("addy.io response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("addy.io API error: {} - {}", status, message);
            return Err(GatewayError::Api { status, message });
        }
        Ok(response)
    }
}

#[async_trait]
impl AliasGateway for AddyClient {
    async fn fetch_all(&self) -> Result<Vec<AliasRecord>, GatewayError> {
        info!("Fetching aliases from {}", self.base_url);
        let response = self
            .send(self.request(reqwest::Method::GET, "aliases"))
            .await?;
        let body: AliasesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;
        info!("Fetched {} aliases", body.data.len());
        Ok(body.data)
    }

    async fn enable(&self, id: &str) -> Result<(), GatewayError> {
        info!("Enabling alias {}", id);
        self.send(
            self.request(reqwest::Method::POST, "active-aliases")
                .json(&ActivateRequest { id }),
        )
        .await?;
        Ok(())
    }

    async fn disable(&self, id: &str) -> Result<(), GatewayError> {
        info!("Disabling alias {}", id);
        self.send(self.request(
            reqwest::Method::DELETE,
            &format!("active-aliases/{id}"),
        ))
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AddyClient::new("t".into(), Some("http://localhost:8080/".into()));
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_default_base_url() {
        let client = AddyClient::new("t".into(), None);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_activate_request_body() {
        let body = serde_json::to_value(ActivateRequest { id: "abc" }).unwrap();
        assert_eq!(body, serde_json::json!({ "id": "abc" }));
    }
}
