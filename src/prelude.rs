/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types, traits and helpers in one import.
//!
//! ```rust
//! use bitthought_jobs::prelude::*;
//!
//! let message = NotificationMessage::captains_log();
//! assert_eq!(message.heading, CAPTAINS_LOG_HEADING);
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{
    CoinGeckoConfig, CoinMarketCapConfig, OneSignalConfig, QuotesConfig,
};
pub use crate::storage::config::{DatabaseConfig, StoreConfig, SupabaseConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, AppResult};

// ============================================================================
// INTERFACES AND SERVICES
// ============================================================================

pub use crate::application::interfaces::market::PriceSource;
pub use crate::application::interfaces::notifier::PushNotifier;
pub use crate::application::interfaces::quotes::QuoteSource;
pub use crate::application::interfaces::store::DataStore;
pub use crate::application::jobs;
pub use crate::application::services::{
    NotificationService, PriceIngestion, PriceService, RotationOutcome, RotationService,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::records::{PriceRecord, Profile, RotationState};
pub use crate::model::requests::{CreateNotificationRequest, NotificationMessage};
pub use crate::model::responses::{
    CoinGeckoCoinResponse, CoinMarketCapQuotesResponse, CreateNotificationResponse,
};
pub use crate::model::rotation::{RotationStep, parse_lines};

// ============================================================================
// PROVIDERS AND STORES
// ============================================================================

pub use crate::providers::{CoinGeckoClient, CoinMarketCapClient, HttpQuoteSource, OneSignalClient};
pub use crate::storage::{PgStore, PostgrestStore, connect_store};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::load_env;
pub use crate::utils::logger::setup_logger;

pub use crate::constants::*;

pub use async_trait::async_trait;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
