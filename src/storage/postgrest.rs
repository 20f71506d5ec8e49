/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::store::DataStore;
use crate::constants::{PRICE_ROW_ID, PRICE_TABLE, PROFILES_TABLE, ROTATION_ROW_ID, ROTATION_TABLE};
use crate::error::AppError;
use crate::model::http::{join_url, make_http_request};
use crate::model::records::{PriceRecord, Profile, RotationState};
use crate::storage::config::SupabaseConfig;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

const RETURN_REPRESENTATION: &str = "return=representation";
const ROTATION_COLUMNS: &str = "id,quote,current_line_number";

#[derive(Deserialize)]
struct RowId {
    id: i64,
}

/// Builds a PostgREST equality filter value, e.g. `eq.1`
#[must_use]
pub fn eq_filter(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

/// Data store backed by the Supabase REST interface
pub struct PostgrestStore {
    http_client: Client,
    config: SupabaseConfig,
}

impl PostgrestStore {
    /// Creates a store sharing an existing HTTP client
    pub fn new(http_client: Client, config: SupabaseConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn table_url(&self, table: &str) -> String {
        join_url(&self.config.url, &format!("rest/v1/{table}"))
    }

    /// Sends one request to a table endpoint and decodes the returned rows
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        table: &str,
        query: &[(&str, &str)],
        body: &Option<B>,
    ) -> Result<Vec<T>, AppError> {
        let url = self.table_url(table);
        let bearer = format!("Bearer {}", self.config.key);
        let mut headers = vec![
            ("apikey", self.config.key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Accept", "application/json"),
        ];
        if body.is_some() {
            headers.push(("Prefer", RETURN_REPRESENTATION));
        }

        let response =
            make_http_request(&self.http_client, method, &url, headers, query, body, None).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<T> = serde_json::from_str(&text)?;
        debug!("{} returned {} rows", table, rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl DataStore for PostgrestStore {
    async fn update_price(&self, record: &PriceRecord) -> Result<Option<i64>, AppError> {
        let id = eq_filter(PRICE_ROW_ID);
        let rows: Vec<RowId> = self
            .send(Method::PATCH, PRICE_TABLE, &[("id", id.as_str())], &Some(record))
            .await?;
        Ok(rows.first().map(|row| row.id))
    }

    async fn get_rotation_state(&self) -> Result<Option<RotationState>, AppError> {
        let id = eq_filter(ROTATION_ROW_ID);
        let rows: Vec<RotationState> = self
            .send(
                Method::GET,
                ROTATION_TABLE,
                &[("select", ROTATION_COLUMNS), ("id", id.as_str())],
                &None::<()>,
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_rotation_state(&self, state: &RotationState) -> Result<u64, AppError> {
        let rows: Vec<serde_json::Value> = self
            .send(Method::POST, ROTATION_TABLE, &[], &Some(state))
            .await?;
        Ok(rows.len() as u64)
    }

    async fn update_rotation_state(&self, state: &RotationState) -> Result<u64, AppError> {
        let id = eq_filter(state.id);
        let rows: Vec<serde_json::Value> = self
            .send(Method::PATCH, ROTATION_TABLE, &[("id", id.as_str())], &Some(state))
            .await?;
        Ok(rows.len() as u64)
    }

    async fn subscribed_profile_ids(&self, preference: &str) -> Result<Vec<String>, AppError> {
        let enabled = eq_filter(true);
        let profiles: Vec<Profile> = self
            .send(
                Method::GET,
                PROFILES_TABLE,
                &[("select", "id"), (preference, enabled.as_str())],
                &None::<()>,
            )
            .await?;
        Ok(profiles.into_iter().map(|p| p.id).collect())
    }
}
