//! Formation operations: map the payload, call storage, map the row back.

use crate::error::AppError;
use crate::mapper::{from_row, patch_to_row, to_row};
use crate::model::{Formation, FormationPatch, FormationPayload};
use crate::store::FormationStore;
use std::sync::Arc;

/// Returned by `create` when storage accepts the insert but sends no row back.
pub const CREATE_RETURNED_NOTHING: &str = "Impossible de créer la formation.";

#[derive(Clone)]
pub struct FormationService {
    store: Arc<dyn FormationStore>,
}

impl FormationService {
    pub fn new(store: Arc<dyn FormationStore>) -> Self {
        Self { store }
    }

    /// All formations, most recently created first.
    pub async fn list(&self) -> Result<Vec<Formation>, AppError> {
        tracing::debug!("list formations");
        let rows = self.store.list().await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Formation>, AppError> {
        tracing::debug!(id = %id, "get formation");
        let row = self.store.get(id).await?;
        Ok(row.map(from_row))
    }

    pub async fn create(&self, payload: &FormationPayload) -> Result<Formation, AppError> {
        tracing::debug!(name = %payload.name, "create formation");
        let row = self
            .store
            .insert(&to_row(payload))
            .await?
            .ok_or_else(|| AppError::Storage(CREATE_RETURNED_NOTHING.into()))?;
        Ok(from_row(row))
    }

    /// Only the fields present in `patch` change. `None` when no row has that id.
    pub async fn update(&self, id: &str, patch: &FormationPatch) -> Result<Option<Formation>, AppError> {
        tracing::debug!(id = %id, "update formation");
        let row = self.store.update(id, &patch_to_row(patch)).await?;
        Ok(row.map(from_row))
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        tracing::debug!(id = %id, "delete formation");
        self.store.delete(id).await?;
        Ok(())
    }

    /// Storage error message from a minimal read, or `None` when storage answered.
    pub async fn reachability(&self) -> Option<String> {
        match self.store.ping().await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "storage reachability check failed");
                Some(e.message)
            }
        }
    }
}
