/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

/// User agent string sent with every outbound request
pub const USER_AGENT: &str = "bitthought-jobs/0.1.0";

/// Default base URL of the CoinMarketCap pro API
pub const DEFAULT_CMC_BASE_URL: &str = "https://pro-api.coinmarketcap.com";
/// Path of the CoinMarketCap latest quotes endpoint
pub const CMC_QUOTES_LATEST_PATH: &str = "v1/cryptocurrency/quotes/latest";
/// Symbol requested from CoinMarketCap when none is configured
pub const DEFAULT_CMC_SYMBOL: &str = "BTC";

/// Default base URL of the CoinGecko API
pub const DEFAULT_CG_BASE_URL: &str = "https://api.coingecko.com";
/// Coin requested from CoinGecko when none is configured
pub const DEFAULT_CG_COIN_ID: &str = "bitcoin";

/// Default base URL of the OneSignal REST API
pub const DEFAULT_ONE_SIGNAL_BASE_URL: &str = "https://api.onesignal.com";

/// Raw text file holding one BitThought per line
pub const DEFAULT_BITTHOUGHTS_URL: &str =
    "https://raw.githubusercontent.com/oogunjob/Daily-BitThought/refs/heads/main/bitthoughts.txt";
/// Connect/read timeout for the BitThoughts download, in seconds
pub const DEFAULT_BITTHOUGHTS_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of Postgres connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Table holding the single current price row
pub const PRICE_TABLE: &str = "bitcoin_price";
/// Table holding the single rotation state row
pub const ROTATION_TABLE: &str = "daily_bitthought";
/// Table holding user profiles and their notification preferences
pub const PROFILES_TABLE: &str = "profiles";

/// Primary key of the current price row
pub const PRICE_ROW_ID: i64 = 1;
/// Primary key of the rotation state row
pub const ROTATION_ROW_ID: i64 = 1;
/// Profile flag selecting the Captain's Log recipients
pub const CAPTAINS_LOG_PREFERENCE: &str = "notif_daily_captains_log";
/// Line served when no rotation state exists yet
pub const FIRST_LINE_NUMBER: i64 = 1;

/// Heading of the rotating BitThought notification
pub const BITTHOUGHT_HEADING: &str = "Captain's Log 📜₿";
/// Heading of the static notification
pub const CAPTAINS_LOG_HEADING: &str = "Captain's Log";
/// Body of the static notification
pub const CAPTAINS_LOG_MESSAGE: &str = "Ahoy matey, ship sailing";
/// Language key used for headings and contents
pub const NOTIFICATION_LANGUAGE: &str = "en";
/// Delivery channel targeted by every notification
pub const PUSH_CHANNEL: &str = "push";
/// iOS badge behaviour for every notification
pub const IOS_BADGE_TYPE: &str = "Increase";
/// iOS badge increment for every notification
pub const IOS_BADGE_COUNT: u32 = 1;

/// Number of characters of a quote shown in log lines
pub const QUOTE_PREVIEW_CHARS: usize = 50;
/// Decimal places kept for the CoinGecko 24h percentage change
pub const PERCENT_CHANGE_DECIMALS: u32 = 3;
