//! Item API HTTP client.
//!
//! One `GET` per fetch, no retries: the refresh cycle is the retry policy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::ItemsResponse;
use super::settings::ApiConfig;
use crate::domain::item::ItemMap;
use crate::error::{ApiError, Result};
use crate::port::outbound::source::ItemSource;

/// HTTP client for the item API.
pub struct ItemApiClient {
    http: HttpClient,
    url: String,
}

impl ItemApiClient {
    /// Client with default HTTP settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(concat!("wynnxp/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.url.clone(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ItemSource for ItemApiClient {
    async fn fetch_items(&self) -> Result<ItemMap> {
        debug!(url = %self.url, "Requesting items");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await?;
        let parsed: ItemsResponse = serde_json::from_str(&body)?;
        let items = parsed.into_items()?;

        debug!(items = items.len(), "Items response parsed");
        Ok(items)
    }

    fn source_name(&self) -> &str {
        "item-api"
    }
}
