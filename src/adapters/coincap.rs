//! Listing service adapter (coincap-compatible `/assets` endpoint).

use async_trait::async_trait;

use crate::config::CoinsConfig;
use crate::error::{CoinsError, CoinsResult, TransportError};
use crate::models::{Coin, CoinsEnvelope};
use crate::traits::{CoinRepository, Headers, HttpClient, HttpError};

use super::ReqwestHttpClient;

/// [`CoinRepository`] backed by a coincap-style REST API.
#[derive(Debug, Clone)]
pub struct CoinCapApi<C = ReqwestHttpClient> {
    client: C,
    base_url: String,
}

impl CoinCapApi<ReqwestHttpClient> {
    /// Build the production adapter from config.
    pub fn from_config(config: &CoinsConfig) -> CoinsResult<Self> {
        let client = ReqwestHttpClient::from_config(config).map_err(|e| {
            CoinsError::InvalidRequest {
                url: config.listing_base_url.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(Self::new(client, config.listing_base_url.clone()))
    }
}

impl<C: HttpClient> CoinCapApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one page of assets.
    pub fn assets_url(&self, offset: usize, limit: usize) -> CoinsResult<String> {
        let url = format!("{}/assets?offset={}&limit={}", self.base_url, offset, limit);
        reqwest::Url::parse(&url).map_err(|e| CoinsError::InvalidRequest {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(url)
    }
}

#[async_trait]
impl<C: HttpClient> CoinRepository for CoinCapApi<C> {
    async fn fetch_coins(&self, offset: usize, limit: usize) -> CoinsResult<Vec<Coin>> {
        let url = self.assets_url(offset, limit)?;
        tracing::debug!(offset, limit, %url, "Requesting coin page");

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .client
            .get(&url, &headers)
            .await
            .map_err(|e| match e {
                HttpError::InvalidUrl(message) => CoinsError::InvalidRequest {
                    url: url.clone(),
                    message,
                },
                other => TransportError::from_http(&url, other).into(),
            })?;

        if !response.is_success() {
            return Err(TransportError::HttpStatus {
                status: response.status,
                message: response.text_lossy(),
            }
            .into());
        }

        let envelope: CoinsEnvelope =
            response.json().map_err(|e| CoinsError::InvalidResponse {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(envelope.data)
    }
}
