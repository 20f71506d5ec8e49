/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::records::{PriceRecord, RotationState};
use async_trait::async_trait;

/// Remote tables the jobs read and write
///
/// Every operation is a single round trip. Nothing is cached and nothing is
/// locked on the client side.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Overwrites the current price row with `record`
    ///
    /// Fields left as `None` in the record keep their stored value.
    ///
    /// # Returns
    /// * `Ok(Some(id))` - Id of the updated row
    /// * `Ok(None)` - No row matched the fixed price row id
    async fn update_price(&self, record: &PriceRecord) -> Result<Option<i64>, AppError>;

    /// Reads the rotation state row, `None` on the very first run
    async fn get_rotation_state(&self) -> Result<Option<RotationState>, AppError>;

    /// Creates the rotation state row and returns the number of rows written
    async fn insert_rotation_state(&self, state: &RotationState) -> Result<u64, AppError>;

    /// Overwrites the rotation state row and returns the number of rows written
    async fn update_rotation_state(&self, state: &RotationState) -> Result<u64, AppError>;

    /// Ids of the profiles whose boolean `preference` column is true
    async fn subscribed_profile_ids(&self, preference: &str) -> Result<Vec<String>, AppError>;
}
