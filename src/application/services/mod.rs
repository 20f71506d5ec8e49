/// Module containing the notification dispatch service
pub mod notification_service;
/// Module containing the price ingestion service
pub mod price_service;
/// Module containing the quote rotation service
pub mod rotation_service;
/// Module containing service result types
mod types;

pub use notification_service::NotificationService;
pub use price_service::PriceService;
pub use rotation_service::RotationService;
pub use types::*;
