/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::CoinMarketCapConfig;
use crate::application::interfaces::market::PriceSource;
use crate::constants::CMC_QUOTES_LATEST_PATH;
use crate::error::AppError;
use crate::model::http::{build_http_client, join_url, make_http_request};
use crate::model::records::PriceRecord;
use crate::model::responses::CoinMarketCapQuotesResponse;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Method};
use tracing::{debug, info};

/// Client for the CoinMarketCap latest-quotes endpoint
pub struct CoinMarketCapClient {
    http_client: Client,
    config: CoinMarketCapConfig,
}

impl CoinMarketCapClient {
    /// Creates a client with its own HTTP client
    ///
    /// # Errors
    /// * `AppError::Network` - if the HTTP client cannot be built
    pub fn new(config: CoinMarketCapConfig) -> Result<Self, AppError> {
        Ok(Self::with_http_client(build_http_client()?, config))
    }

    /// Creates a client sharing an existing HTTP client
    pub fn with_http_client(http_client: Client, config: CoinMarketCapConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetches the raw latest-quotes payload for the configured symbol
    pub async fn get_latest_quotes(&self) -> Result<CoinMarketCapQuotesResponse, AppError> {
        let url = join_url(&self.config.base_url, CMC_QUOTES_LATEST_PATH);
        info!("Fetching {} quote from CoinMarketCap", self.config.symbol);

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            vec![
                ("X-CMC_PRO_API_KEY", self.config.api_key.as_str()),
                ("Accept", "application/json"),
            ],
            &[("symbol", self.config.symbol.as_str())],
            &None::<()>,
            None,
        )
        .await?;

        let body = response.text().await?;
        let quotes: CoinMarketCapQuotesResponse = serde_json::from_str(&body)?;
        debug!("CoinMarketCap returned {} assets", quotes.data.len());
        Ok(quotes)
    }
}

#[async_trait]
impl PriceSource for CoinMarketCapClient {
    fn name(&self) -> &str {
        "CoinMarketCap"
    }

    async fn fetch_price(&self) -> Result<PriceRecord, AppError> {
        let quotes = self.get_latest_quotes().await?;
        PriceRecord::from_coinmarketcap(&quotes, &self.config.symbol, Utc::now())
    }
}
