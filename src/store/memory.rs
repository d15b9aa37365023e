//! In-process store: same contract as the remote backends, nothing persisted.

use super::FormationStore;
use crate::error::StoreError;
use crate::model::{FormationRow, FormationRowPatch, NewFormationRow};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Rows kept in creation order; listing walks them backwards (newest first).
#[derive(Default)]
pub struct MemoryFormationStore {
    rows: RwLock<Vec<FormationRow>>,
}

impl MemoryFormationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn materialize(row: &NewFormationRow) -> FormationRow {
        FormationRow {
            id: uuid::Uuid::new_v4().to_string(),
            name: row.name.clone(),
            description: Some(row.description.clone()),
            skills_description: Some(row.skills_description.clone()),
            start_date: row.start_date.clone(),
            end_date: row.end_date.clone(),
        }
    }
}

#[async_trait]
impl FormationStore for MemoryFormationStore {
    async fn list(&self) -> Result<Vec<FormationRow>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().rev().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<FormationRow>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, row: &NewFormationRow) -> Result<Option<FormationRow>, StoreError> {
        let stored = Self::materialize(row);
        self.rows.write().await.push(stored.clone());
        Ok(Some(stored))
    }

    async fn update(&self, id: &str, patch: &FormationRowPatch) -> Result<Option<FormationRow>, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        patch.apply_to(row);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.rows.write().await.retain(|r| r.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<String>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().map(|r| r.name.clone()).collect())
    }

    async fn insert_many(&self, rows: &[NewFormationRow]) -> Result<(), StoreError> {
        let mut stored = self.rows.write().await;
        stored.extend(rows.iter().map(Self::materialize));
        Ok(())
    }
}
