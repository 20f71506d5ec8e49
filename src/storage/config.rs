/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_DATABASE_MAX_CONNECTIONS;
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_required};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Configuration for the Supabase REST (PostgREST) interface
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Service or anon key sent as `apikey` and bearer token
    #[serde(skip_serializing, default)]
    pub key: String,
}

impl SupabaseConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_KEY`
    ///
    /// # Errors
    /// * `AppError::MissingEnv` - if either variable is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            url: get_env_required("SUPABASE_URL")?,
            key: get_env_required("SUPABASE_KEY")?,
        })
    }
}

/// Configuration for direct Postgres connections
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(skip_serializing, default)]
    pub url: String,
    /// Maximum number of connections in the connection pool
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`
    ///
    /// # Errors
    /// * `AppError::MissingEnv` - if `DATABASE_URL` is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            url: get_env_required("DATABASE_URL")?,
            max_connections: get_env_or_default(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            ),
        })
    }
}

/// Which backend the jobs read and write through
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Supabase REST interface
    Supabase(SupabaseConfig),
    /// Direct Postgres connection
    Postgres(DatabaseConfig),
}

impl StoreConfig {
    /// Reads `DATA_STORE_BACKEND` (`supabase` or `postgres`, default `supabase`)
    /// and then the variables of the chosen backend
    ///
    /// # Errors
    /// * `AppError::InvalidConfig` - if the backend name is unknown
    /// * `AppError::MissingEnv` - if a variable of the chosen backend is not set
    pub fn from_env() -> Result<Self, AppError> {
        let backend = get_env_or_default("DATA_STORE_BACKEND", "supabase".to_string());
        match backend.trim().to_lowercase().as_str() {
            "supabase" | "postgrest" => Ok(StoreConfig::Supabase(SupabaseConfig::from_env()?)),
            "postgres" | "postgresql" => Ok(StoreConfig::Postgres(DatabaseConfig::from_env()?)),
            other => Err(AppError::InvalidConfig(format!(
                "unknown DATA_STORE_BACKEND: {other}"
            ))),
        }
    }
}
