/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::records::PriceRecord;
use async_trait::async_trait;

/// A market-data API that can produce the current price record
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Human-readable provider name used in log lines
    fn name(&self) -> &str;

    /// Fetches the latest quote and maps it to a price record
    ///
    /// # Returns
    /// * `Ok(PriceRecord)` - Record stamped with the capture time
    /// * `Err(AppError)` - Transport failure or a payload missing expected fields
    async fn fetch_price(&self) -> Result<PriceRecord, AppError>;
}
