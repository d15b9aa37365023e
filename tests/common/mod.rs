#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{self, Request};
use certigen_backend::model::{FormationRow, FormationRowPatch, NewFormationRow};
use certigen_backend::{FormationStore, StoreError};
use std::sync::Mutex;

/// Store whose every call fails with the given message.
pub struct FailingStore(pub &'static str);

impl FailingStore {
    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::new(self.0))
    }
}

#[async_trait]
impl FormationStore for FailingStore {
    async fn list(&self) -> Result<Vec<FormationRow>, StoreError> {
        self.fail()
    }
    async fn get(&self, _id: &str) -> Result<Option<FormationRow>, StoreError> {
        self.fail()
    }
    async fn insert(&self, _row: &NewFormationRow) -> Result<Option<FormationRow>, StoreError> {
        self.fail()
    }
    async fn update(&self, _id: &str, _patch: &FormationRowPatch) -> Result<Option<FormationRow>, StoreError> {
        self.fail()
    }
    async fn delete(&self, _id: &str) -> Result<(), StoreError> {
        self.fail()
    }
    async fn ping(&self) -> Result<(), StoreError> {
        self.fail()
    }
    async fn list_names(&self) -> Result<Vec<String>, StoreError> {
        self.fail()
    }
    async fn insert_many(&self, _rows: &[NewFormationRow]) -> Result<(), StoreError> {
        self.fail()
    }
}

/// Store that accepts every write but never returns a row, recording the update patches it saw.
#[derive(Default)]
pub struct SilentStore {
    pub patches: Mutex<Vec<(String, FormationRowPatch)>>,
}

#[async_trait]
impl FormationStore for SilentStore {
    async fn list(&self) -> Result<Vec<FormationRow>, StoreError> {
        Ok(Vec::new())
    }
    async fn get(&self, _id: &str) -> Result<Option<FormationRow>, StoreError> {
        Ok(None)
    }
    async fn insert(&self, _row: &NewFormationRow) -> Result<Option<FormationRow>, StoreError> {
        Ok(None)
    }
    async fn update(&self, id: &str, patch: &FormationRowPatch) -> Result<Option<FormationRow>, StoreError> {
        self.patches.lock().unwrap().push((id.to_string(), patch.clone()));
        Ok(None)
    }
    async fn delete(&self, _id: &str) -> Result<(), StoreError> {
        Ok(())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
    async fn list_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }
    async fn insert_many(&self, _rows: &[NewFormationRow]) -> Result<(), StoreError> {
        Ok(())
    }
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
