//! Storage backends for the `formations` table.
//!
//! The service only sees [`FormationStore`]; the concrete backend is picked once at
//! startup by [`connect_store`] and shared as `Arc<dyn FormationStore>`.

mod memory;
mod postgres;
mod supabase;

pub use memory::MemoryFormationStore;
pub use postgres::{update_sql, PostgresFormationStore};
pub use supabase::{postgrest_error_message, SupabaseFormationStore};

use crate::config::Config;
use crate::error::StoreError;
use crate::model::{FormationRow, FormationRowPatch, NewFormationRow};
use async_trait::async_trait;
use std::sync::Arc;

pub const TABLE: &str = "formations";

/// Request/response access to the remote table. Implementations hold no per-request state.
#[async_trait]
pub trait FormationStore: Send + Sync {
    /// All rows, most recently created first.
    async fn list(&self) -> Result<Vec<FormationRow>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<FormationRow>, StoreError>;

    /// Inserts one row and returns it as stored (with its generated id).
    async fn insert(&self, row: &NewFormationRow) -> Result<Option<FormationRow>, StoreError>;

    /// Writes only the present fields. `None` when no row has that id.
    async fn update(&self, id: &str, patch: &FormationRowPatch) -> Result<Option<FormationRow>, StoreError>;

    /// Removing an unknown id is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Minimal read used by the reachability check.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_names(&self) -> Result<Vec<String>, StoreError>;

    /// Inserts every row in a single request.
    async fn insert_many(&self, rows: &[NewFormationRow]) -> Result<(), StoreError>;
}

/// Postgres when `DATABASE_URL` is set, otherwise the Supabase REST API.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn FormationStore>, StoreError> {
    if let Some(database_url) = &config.database_url {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        tracing::info!("storage: direct postgres connection");
        return Ok(Arc::new(PostgresFormationStore::new(pool)));
    }
    let store = SupabaseFormationStore::new(&config.supabase_url, &config.supabase_anon_key)?;
    tracing::info!(url = %config.supabase_url, "storage: supabase rest api");
    Ok(Arc::new(store))
}
