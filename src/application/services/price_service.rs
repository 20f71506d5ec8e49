/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::market::PriceSource;
use crate::application::interfaces::store::DataStore;
use crate::application::services::types::PriceIngestion;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{error, info};

/// Fetches the current price from one source and overwrites the price row
pub struct PriceService {
    source: Arc<dyn PriceSource>,
    store: Arc<dyn DataStore>,
}

impl PriceService {
    /// Creates a new price service
    pub fn new(source: Arc<dyn PriceSource>, store: Arc<dyn DataStore>) -> Self {
        Self { source, store }
    }

    /// Runs one ingestion: fetch, map, overwrite
    ///
    /// # Errors
    /// Any fetch, mapping or store failure; nothing is retried.
    pub async fn run(&self) -> Result<PriceIngestion, AppError> {
        let record = match self.source.fetch_price().await {
            Ok(record) => record,
            Err(e) => {
                error!("Error fetching data from {}: {}", self.source.name(), e);
                return Err(e);
            }
        };

        let row_id = match self.store.update_price(&record).await {
            Ok(row_id) => row_id,
            Err(e) => {
                error!("Error storing data in Supabase: {}", e);
                return Err(e);
            }
        };

        info!("Successfully stored Bitcoin price: ${:.2}", record.price);
        info!("24h change: {:.2}%", record.percent_change_24h);
        match row_id {
            Some(id) => info!("Record ID: {}", id),
            None => info!("Record ID: Unknown"),
        }

        Ok(PriceIngestion { record, row_id })
    }
}
