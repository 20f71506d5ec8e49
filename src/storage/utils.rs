/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::store::DataStore;
use crate::error::AppError;
use crate::storage::config::{DatabaseConfig, StoreConfig};
use crate::storage::postgres::PgStore;
use crate::storage::postgrest::PostgrestStore;
use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

/// Creates a PostgreSQL connection pool from database configuration
///
/// # Arguments
/// * `config` - Database configuration containing URL and max connections
///
/// # Returns
/// * `Result<PgPool, AppError>` - Connection pool or an error
pub async fn create_connection_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    info!(
        "Creating PostgreSQL connection pool with max {} connections",
        config.max_connections
    );

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .map_err(AppError::Db)?;

    info!("PostgreSQL connection pool created successfully");
    Ok(pool)
}

/// Builds the data store selected by `config`
///
/// The REST backend reuses `http_client`; the Postgres backend opens its own pool.
pub async fn connect_store(
    config: &StoreConfig,
    http_client: &Client,
) -> Result<Arc<dyn DataStore>, AppError> {
    match config {
        StoreConfig::Supabase(supabase) => {
            info!("Using Supabase REST store at {}", supabase.url);
            Ok(Arc::new(PostgrestStore::new(
                http_client.clone(),
                supabase.clone(),
            )))
        }
        StoreConfig::Postgres(database) => {
            let pool = create_connection_pool(database).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}
