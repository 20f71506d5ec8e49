/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BITTHOUGHTS_TIMEOUT_SECS, DEFAULT_BITTHOUGHTS_URL, DEFAULT_CG_BASE_URL,
    DEFAULT_CG_COIN_ID, DEFAULT_CMC_BASE_URL, DEFAULT_CMC_SYMBOL, DEFAULT_ONE_SIGNAL_BASE_URL,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_required};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials and endpoint for the CoinMarketCap pro API
pub struct CoinMarketCapConfig {
    /// API key sent as `X-CMC_PRO_API_KEY`
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Base URL of the API
    pub base_url: String,
    /// Symbol whose quote is stored
    pub symbol: String,
}

impl CoinMarketCapConfig {
    /// Reads `CMC_API_KEY`, `CMC_BASE_URL` and `CMC_SYMBOL`
    ///
    /// # Errors
    /// * `AppError::MissingEnv` - if `CMC_API_KEY` is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            api_key: get_env_required("CMC_API_KEY")?,
            base_url: get_env_or_default("CMC_BASE_URL", DEFAULT_CMC_BASE_URL.to_string()),
            symbol: get_env_or_default("CMC_SYMBOL", DEFAULT_CMC_SYMBOL.to_string()),
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials and endpoint for the CoinGecko API
pub struct CoinGeckoConfig {
    /// API key sent as `x-cg-pro-api-key`
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Base URL of the API
    pub base_url: String,
    /// Coin id whose market data is stored
    pub coin_id: String,
}

impl CoinGeckoConfig {
    /// Reads `CG_API_KEY`, `CG_BASE_URL` and `CG_COIN_ID`
    ///
    /// # Errors
    /// * `AppError::MissingEnv` - if `CG_API_KEY` is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            api_key: get_env_required("CG_API_KEY")?,
            base_url: get_env_or_default("CG_BASE_URL", DEFAULT_CG_BASE_URL.to_string()),
            coin_id: get_env_or_default("CG_COIN_ID", DEFAULT_CG_COIN_ID.to_string()),
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials and endpoint for the OneSignal REST API
pub struct OneSignalConfig {
    /// Application the notifications belong to
    pub app_id: String,
    /// REST API key of the application
    #[serde(skip_serializing, default)]
    pub app_key: String,
    /// Base URL of the API
    pub base_url: String,
}

impl OneSignalConfig {
    /// Reads `ONE_SIGNAL_APP_ID`, `ONE_SIGNAL_APP_KEY` and `ONE_SIGNAL_BASE_URL`
    ///
    /// # Errors
    /// * `AppError::MissingEnv` - if the app id or the app key is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            app_id: get_env_required("ONE_SIGNAL_APP_ID")?,
            app_key: get_env_required("ONE_SIGNAL_APP_KEY")?,
            base_url: get_env_or_default(
                "ONE_SIGNAL_BASE_URL",
                DEFAULT_ONE_SIGNAL_BASE_URL.to_string(),
            ),
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Location of the BitThoughts text file
pub struct QuotesConfig {
    /// URL of the newline-delimited file
    pub url: String,
    /// Connect and read timeout in seconds
    pub timeout_secs: u64,
}

impl QuotesConfig {
    /// Reads `BITTHOUGHTS_URL` and `BITTHOUGHTS_TIMEOUT_SECS`
    ///
    /// # Errors
    /// * `AppError::InvalidConfig` - if the timeout is zero
    pub fn from_env() -> Result<Self, AppError> {
        let timeout_secs =
            get_env_or_default("BITTHOUGHTS_TIMEOUT_SECS", DEFAULT_BITTHOUGHTS_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "BITTHOUGHTS_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            url: get_env_or_default("BITTHOUGHTS_URL", DEFAULT_BITTHOUGHTS_URL.to_string()),
            timeout_secs,
        })
    }

    /// Timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BITTHOUGHTS_URL.to_string(),
            timeout_secs: DEFAULT_BITTHOUGHTS_TIMEOUT_SECS,
        }
    }
}
