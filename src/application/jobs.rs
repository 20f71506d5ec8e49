/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Job entry points
//!
//! Each function takes the configuration its binary loaded from the
//! environment, builds the clients it needs for this one invocation and runs
//! the matching service. Nothing outlives the call.
//!
//! The `*_from_env` variants load every configuration the job needs first, so
//! a missing variable fails the job before any request is sent.

use crate::application::config::{
    CoinGeckoConfig, CoinMarketCapConfig, OneSignalConfig, QuotesConfig,
};
use crate::application::services::{
    NotificationService, PriceIngestion, PriceService, RotationService,
};
use crate::constants::QUOTE_PREVIEW_CHARS;
use crate::error::AppError;
use crate::model::http::build_http_client;
use crate::model::requests::NotificationMessage;
use crate::model::rotation::preview;
use crate::providers::{CoinGeckoClient, CoinMarketCapClient, HttpQuoteSource, OneSignalClient};
use crate::storage::config::StoreConfig;
use crate::storage::utils::connect_store;
use std::sync::Arc;
use tracing::{error, info};

/// Stores the CoinMarketCap quote in the price row
pub async fn fetch_price_coinmarketcap(
    cmc: &CoinMarketCapConfig,
    store: &StoreConfig,
) -> Result<PriceIngestion, AppError> {
    let http_client = build_http_client()?;
    let store = connect_store(store, &http_client).await?;
    let source = CoinMarketCapClient::with_http_client(http_client, cmc.clone());
    PriceService::new(Arc::new(source), store).run().await
}

/// Stores the CoinGecko market data in the price row
pub async fn fetch_price_coingecko(
    cg: &CoinGeckoConfig,
    store: &StoreConfig,
) -> Result<PriceIngestion, AppError> {
    let http_client = build_http_client()?;
    let store = connect_store(store, &http_client).await?;
    let source = CoinGeckoClient::with_http_client(http_client, cg.clone());
    PriceService::new(Arc::new(source), store).run().await
}

/// Rotates to the next BitThought and pushes it to the Captain's Log subscribers
///
/// No notification is sent if the rotation fails.
///
/// # Returns
/// Number of recipients notified
pub async fn send_daily_bitthought(
    quotes: &QuotesConfig,
    one_signal: &OneSignalConfig,
    store: &StoreConfig,
) -> Result<usize, AppError> {
    let http_client = build_http_client()?;
    let store = connect_store(store, &http_client).await?;

    let source = HttpQuoteSource::with_http_client(http_client.clone(), quotes.clone());
    let outcome = match RotationService::new(Arc::new(source), store.clone())
        .rotate()
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Failed to fetch daily bitthought. Aborting notification send.");
            return Err(e);
        }
    };

    let notifier = OneSignalClient::with_http_client(http_client, one_signal.clone());
    let sent = NotificationService::new(store, Arc::new(notifier))
        .dispatch(&NotificationMessage::bitthought(outcome.quote.as_str()))
        .await?;
    if sent > 0 {
        info!(
            "Sent notification with quote: {}...",
            preview(&outcome.quote, QUOTE_PREVIEW_CHARS)
        );
    }
    Ok(sent)
}

/// Pushes the static Captain's Log message to its subscribers
///
/// # Returns
/// Number of recipients notified
pub async fn send_captains_log(
    one_signal: &OneSignalConfig,
    store: &StoreConfig,
) -> Result<usize, AppError> {
    let http_client = build_http_client()?;
    let store = connect_store(store, &http_client).await?;
    let notifier = OneSignalClient::with_http_client(http_client, one_signal.clone());
    NotificationService::new(store, Arc::new(notifier))
        .dispatch(&NotificationMessage::captains_log())
        .await
}

/// Loads the CoinMarketCap and store settings, then runs [`fetch_price_coinmarketcap`]
pub async fn fetch_price_coinmarketcap_from_env() -> Result<PriceIngestion, AppError> {
    let cmc = CoinMarketCapConfig::from_env()?;
    let store = StoreConfig::from_env()?;
    fetch_price_coinmarketcap(&cmc, &store).await
}

/// Loads the CoinGecko and store settings, then runs [`fetch_price_coingecko`]
pub async fn fetch_price_coingecko_from_env() -> Result<PriceIngestion, AppError> {
    let cg = CoinGeckoConfig::from_env()?;
    let store = StoreConfig::from_env()?;
    fetch_price_coingecko(&cg, &store).await
}

/// Loads the quote file, OneSignal and store settings, then runs [`send_daily_bitthought`]
pub async fn send_daily_bitthought_from_env() -> Result<usize, AppError> {
    let quotes = QuotesConfig::from_env()?;
    let one_signal = OneSignalConfig::from_env()?;
    let store = StoreConfig::from_env()?;
    send_daily_bitthought(&quotes, &one_signal, &store).await
}

/// Loads the OneSignal and store settings, then runs [`send_captains_log`]
pub async fn send_captains_log_from_env() -> Result<usize, AppError> {
    let one_signal = OneSignalConfig::from_env()?;
    let store = StoreConfig::from_env()?;
    send_captains_log(&one_signal, &store).await
}
