/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{FIRST_LINE_NUMBER, PERCENT_CHANGE_DECIMALS};
use crate::error::AppError;
use crate::model::responses::{CoinGeckoCoinResponse, CoinMarketCapQuotesResponse};
use crate::utils::finance::round_to;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

const USD: &str = "USD";
const USD_LOWER: &str = "usd";

/// Current price row, overwritten on every price run
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    /// Last traded price in USD
    pub price: f64,
    /// When the quote was captured
    pub last_updated: DateTime<Utc>,
    /// 24h change in percent
    pub percent_change_24h: f64,
    /// 24h high in USD
    #[serde(rename = "24h_high", default, skip_serializing_if = "Option::is_none")]
    pub high_24h: Option<f64>,
    /// 24h low in USD
    #[serde(rename = "24h_low", default, skip_serializing_if = "Option::is_none")]
    pub low_24h: Option<f64>,
    /// 24h absolute change in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<f64>,
}

impl PriceRecord {
    /// Maps a CoinMarketCap latest-quotes payload to a price record
    ///
    /// Price and change are taken as-is from `data.<symbol>.quote.USD`.
    ///
    /// # Errors
    /// * `AppError::Deserialization` - if the symbol or its USD quote is missing
    pub fn from_coinmarketcap(
        response: &CoinMarketCapQuotesResponse,
        symbol: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let asset = response.data.get(symbol).ok_or_else(|| {
            AppError::Deserialization(format!("missing field `data.{symbol}`"))
        })?;
        let quote = asset.quote.get(USD).ok_or_else(|| {
            AppError::Deserialization(format!("missing field `data.{symbol}.quote.{USD}`"))
        })?;

        Ok(Self {
            price: quote.price,
            last_updated: captured_at,
            percent_change_24h: quote.percent_change_24h,
            high_24h: None,
            low_24h: None,
            price_change_24h: None,
        })
    }

    /// Maps a CoinGecko coin payload to a price record
    ///
    /// The percentage change is rounded to three decimals, everything else
    /// is stored unrounded.
    ///
    /// # Errors
    /// * `AppError::Deserialization` - if a `usd` entry is missing
    pub fn from_coingecko(
        response: &CoinGeckoCoinResponse,
        captured_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let market = &response.market_data;
        let usd = |field: &str, values: &std::collections::HashMap<String, f64>| {
            values.get(USD_LOWER).copied().ok_or_else(|| {
                AppError::Deserialization(format!("missing field `market_data.{field}.usd`"))
            })
        };

        Ok(Self {
            price: usd("current_price", &market.current_price)?,
            last_updated: captured_at,
            percent_change_24h: round_to(
                market.price_change_percentage_24h,
                PERCENT_CHANGE_DECIMALS,
            ),
            high_24h: Some(usd("high_24h", &market.high_24h)?),
            low_24h: Some(usd("low_24h", &market.low_24h)?),
            price_change_24h: Some(market.price_change_24h),
        })
    }
}

fn first_line_number() -> i64 {
    FIRST_LINE_NUMBER
}

/// Rotation state row: the quote served last and the line to serve next
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RotationState {
    /// Primary key, always the fixed rotation row id
    pub id: i64,
    /// Quote served by the previous run
    #[serde(default)]
    pub quote: Option<String>,
    /// 1-based line to serve on the next run
    #[serde(default = "first_line_number")]
    pub current_line_number: i64,
    /// Write time sent on update; never read back, the column type varies
    /// between deployments
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// A user profile as far as recipient resolution is concerned
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Profile id, also the OneSignal external id
    pub id: String,
}
