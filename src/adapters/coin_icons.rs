//! Icon service adapter (`/api/icon/{symbol}`).

use async_trait::async_trait;

use crate::config::CoinsConfig;
use crate::error::IconError;
use crate::models::Icon;
use crate::traits::{Headers, HttpClient, IconRepository};

use super::ReqwestHttpClient;

/// [`IconRepository`] that downloads PNG icons and decodes them.
#[derive(Debug, Clone)]
pub struct CoinIconApi<C = ReqwestHttpClient> {
    client: C,
    base_url: String,
}

impl CoinIconApi<ReqwestHttpClient> {
    pub fn from_config(config: &CoinsConfig) -> Result<Self, crate::traits::HttpError> {
        let client = ReqwestHttpClient::from_config(config)?;
        Ok(Self::new(client, config.icon_base_url.clone()))
    }
}

impl<C: HttpClient> CoinIconApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn icon_url(&self, symbol: &str) -> String {
        format!("{}/api/icon/{}", self.base_url, symbol)
    }
}

#[async_trait]
impl<C: HttpClient> IconRepository for CoinIconApi<C> {
    async fn fetch_icon(&self, symbol: &str) -> Result<Icon, IconError> {
        let url = self.icon_url(symbol);
        let response = self
            .client
            .get(&url, &Headers::new())
            .await
            .map_err(|e| IconError::Fetch {
                symbol: symbol.to_string(),
                message: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(IconError::NotFound {
                symbol: symbol.to_string(),
                status: response.status,
            });
        }

        Icon::decode(symbol, response.body)
    }
}
