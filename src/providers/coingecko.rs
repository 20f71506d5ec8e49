/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::CoinGeckoConfig;
use crate::application::interfaces::market::PriceSource;
use crate::error::AppError;
use crate::model::http::{build_http_client, join_url, make_http_request};
use crate::model::records::PriceRecord;
use crate::model::responses::CoinGeckoCoinResponse;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Method};
use tracing::info;

/// Client for the CoinGecko coin endpoint
pub struct CoinGeckoClient {
    http_client: Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    /// Creates a client with its own HTTP client
    ///
    /// # Errors
    /// * `AppError::Network` - if the HTTP client cannot be built
    pub fn new(config: CoinGeckoConfig) -> Result<Self, AppError> {
        Ok(Self::with_http_client(build_http_client()?, config))
    }

    /// Creates a client sharing an existing HTTP client
    pub fn with_http_client(http_client: Client, config: CoinGeckoConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetches the raw coin payload for the configured coin id
    pub async fn get_coin(&self) -> Result<CoinGeckoCoinResponse, AppError> {
        let path = format!("api/v3/coins/{}", self.config.coin_id);
        let url = join_url(&self.config.base_url, &path);
        info!("Fetching {} market data from CoinGecko", self.config.coin_id);

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            vec![
                ("x-cg-pro-api-key", self.config.api_key.as_str()),
                ("Accept", "application/json"),
            ],
            &[],
            &None::<()>,
            None,
        )
        .await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_price(&self) -> Result<PriceRecord, AppError> {
        let coin = self.get_coin().await?;
        PriceRecord::from_coingecko(&coin, Utc::now())
    }
}
