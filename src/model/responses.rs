/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// `GET /v1/cryptocurrency/quotes/latest` response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CoinMarketCapQuotesResponse {
    /// Assets keyed by the requested symbol
    pub data: HashMap<String, CoinMarketCapAsset>,
    /// Request status block
    #[serde(default)]
    pub status: Option<CoinMarketCapStatus>,
}

/// One asset of a CoinMarketCap quotes response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CoinMarketCapAsset {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Quotes keyed by convert currency, e.g. `USD`
    pub quote: HashMap<String, CoinMarketCapQuote>,
}

/// Price block of a CoinMarketCap asset in one currency
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CoinMarketCapQuote {
    pub price: f64,
    pub percent_change_24h: f64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// CoinMarketCap status block
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CoinMarketCapStatus {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `GET /api/v3/coins/{id}` response, reduced to what the price job reads
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CoinGeckoCoinResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    pub market_data: CoinGeckoMarketData,
}

/// Market data block of a CoinGecko coin
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CoinGeckoMarketData {
    /// Prices keyed by lowercase currency code
    pub current_price: HashMap<String, f64>,
    pub high_24h: HashMap<String, f64>,
    pub low_24h: HashMap<String, f64>,
    /// Absolute 24h change in USD
    pub price_change_24h: f64,
    pub price_change_percentage_24h: f64,
}

/// `POST /notifications` response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct CreateNotificationResponse {
    /// Notification id, empty when nothing was created
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub external_id: Option<String>,
    /// Provider errors, either a list of messages or an object
    #[serde(default)]
    pub errors: Option<Value>,
}

impl CreateNotificationResponse {
    /// True when the provider created a notification
    #[must_use]
    pub fn is_created(&self) -> bool {
        !self.id.is_empty()
    }
}
