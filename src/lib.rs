/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # bitthought-jobs
//!
//! One-shot jobs behind the Daily BitThought app. Each binary reads its
//! configuration from the environment, talks to one upstream API and writes
//! the result to Supabase or pushes it through OneSignal, then exits.
//!
//! | Binary | What it does |
//! |---|---|
//! | `fetch_bitcoin_price` | CoinMarketCap quote into `bitcoin_price` |
//! | `fetch_bitcoin_price_coingecko` | CoinGecko market data into `bitcoin_price` |
//! | `send_daily_bitthought` | Rotates the quote of the day and pushes it |
//! | `send_update_daily_bitthought` | Pushes the static Captain's Log message |
//!
//! The binaries are thin wrappers over [`application::jobs`], and the jobs are
//! thin wrappers over the services in [`application::services`], which only
//! depend on the traits in [`application::interfaces`].

/// Configuration, service traits, services and job wiring
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by every job
pub mod error;
/// Wire and domain models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// HTTP clients for the upstream providers
pub mod providers;
/// Data store backends
pub mod storage;
/// Environment, logging and numeric helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
