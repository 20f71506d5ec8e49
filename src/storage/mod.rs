/// Module containing store configuration structures
pub mod config;
/// Module containing the direct Postgres store
pub mod postgres;
/// Module containing the Supabase REST store
pub mod postgrest;
/// Module containing store construction helpers
pub mod utils;

pub use config::{DatabaseConfig, StoreConfig, SupabaseConfig};
pub use postgres::PgStore;
pub use postgrest::PostgrestStore;
pub use utils::{connect_store, create_connection_pool};
