/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::store::DataStore;
use crate::constants::{
    FIRST_LINE_NUMBER, PRICE_ROW_ID, PRICE_TABLE, PROFILES_TABLE, ROTATION_ROW_ID, ROTATION_TABLE,
};
use crate::error::AppError;
use crate::model::records::{PriceRecord, RotationState};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

/// Returns true if `name` is safe to splice into SQL as a column name
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Data store talking to the Supabase Postgres database directly
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new store over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for PgStore {
    async fn update_price(&self, record: &PriceRecord) -> Result<Option<i64>, AppError> {
        let sql = format!(
            r#"
            UPDATE {PRICE_TABLE}
            SET price = $1,
                last_updated = $2,
                percent_change_24h = $3,
                "24h_high" = COALESCE($4, "24h_high"),
                "24h_low" = COALESCE($5, "24h_low"),
                price_change_24h = COALESCE($6, price_change_24h)
            WHERE id = $7
            RETURNING id::bigint AS id
            "#
        );
        let row = sqlx::query(&sql)
            .bind(record.price)
            .bind(record.last_updated)
            .bind(record.percent_change_24h)
            .bind(record.high_24h)
            .bind(record.low_24h)
            .bind(record.price_change_24h)
            .bind(PRICE_ROW_ID)
            .fetch_optional(&self.pool)
            .await?;

        Ok(match row {
            Some(row) => Some(row.try_get::<i64, _>("id")?),
            None => None,
        })
    }

    async fn get_rotation_state(&self) -> Result<Option<RotationState>, AppError> {
        let sql = format!(
            r#"
            SELECT id::bigint AS id,
                   quote,
                   current_line_number::bigint AS current_line_number
            FROM {ROTATION_TABLE}
            WHERE id = $1
            "#
        );
        let row = sqlx::query(&sql)
            .bind(ROTATION_ROW_ID)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let current_line_number: Option<i64> = row.try_get("current_line_number")?;
        Ok(Some(RotationState {
            id: row.try_get("id")?,
            quote: row.try_get("quote")?,
            current_line_number: current_line_number.unwrap_or(FIRST_LINE_NUMBER),
            last_updated: None,
        }))
    }

    async fn insert_rotation_state(&self, state: &RotationState) -> Result<u64, AppError> {
        let sql = format!(
            "INSERT INTO {ROTATION_TABLE} (id, quote, current_line_number) VALUES ($1, $2, $3)"
        );
        let result = sqlx::query(&sql)
            .bind(state.id)
            .bind(&state.quote)
            .bind(state.current_line_number)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_rotation_state(&self, state: &RotationState) -> Result<u64, AppError> {
        let sql = format!(
            r#"
            UPDATE {ROTATION_TABLE}
            SET quote = $1,
                current_line_number = $2,
                last_updated = COALESCE($3, NOW())
            WHERE id = $4
            "#
        );
        let result = sqlx::query(&sql)
            .bind(&state.quote)
            .bind(state.current_line_number)
            .bind(state.last_updated)
            .bind(state.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn subscribed_profile_ids(&self, preference: &str) -> Result<Vec<String>, AppError> {
        if !is_valid_identifier(preference) {
            return Err(AppError::InvalidConfig(format!(
                "invalid preference column: {preference}"
            )));
        }
        let sql = format!("SELECT id::text AS id FROM {PROFILES_TABLE} WHERE {preference} = true");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        debug!("{} profiles have {} enabled", rows.len(), preference);

        rows.iter()
            .map(|row| row.try_get::<String, _>("id").map_err(AppError::from))
            .collect()
    }
}
