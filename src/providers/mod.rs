/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// CoinGecko coin market data
pub mod coingecko;
/// CoinMarketCap latest quotes
pub mod coinmarketcap;
/// OneSignal push notifications
pub mod onesignal;
/// Quote file download
pub mod quotes;

pub use coingecko::CoinGeckoClient;
pub use coinmarketcap::CoinMarketCapClient;
pub use onesignal::OneSignalClient;
pub use quotes::HttpQuoteSource;
