//! PostgREST access to the Supabase project (`{SUPABASE_URL}/rest/v1/formations`).

use super::{FormationStore, TABLE};
use crate::error::{StoreError, UNEXPECTED_STORAGE_ERROR};
use crate::model::{FormationRow, FormationRowPatch, NewFormationRow};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const COLUMNS: &str = "id,name,description,skills_description,start_date,end_date";

/// Body of a PostgREST error response. Only `message` is surfaced.
#[derive(Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

#[derive(Deserialize)]
struct NameRow {
    name: String,
}

/// Extracts the error message from a PostgREST error body.
pub fn postgrest_error_message(body: &str) -> String {
    serde_json::from_str::<PostgrestError>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UNEXPECTED_STORAGE_ERROR.to_string())
}

/// Shared HTTP client carrying the anon key on every request.
#[derive(Clone)]
pub struct SupabaseFormationStore {
    client: reqwest::Client,
    table_url: String,
}

impl SupabaseFormationStore {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(anon_key)
            .map_err(|_| StoreError::new("SUPABASE_ANON_KEY is not a valid header value"))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", anon_key))
            .map_err(|_| StoreError::new("SUPABASE_ANON_KEY is not a valid header value"))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), TABLE),
        })
    }

    fn id_filter(id: &str) -> (&'static str, String) {
        ("id", format!("eq.{}", id))
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StoreError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %body, "postgrest error");
            return Err(StoreError::new(postgrest_error_message(&body)));
        }
        Ok(resp.json::<T>().await?)
    }

    async fn expect_success(resp: reqwest::Response) -> Result<(), StoreError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %body, "postgrest error");
            return Err(StoreError::new(postgrest_error_message(&body)));
        }
        Ok(())
    }
}

#[async_trait]
impl FormationStore for SupabaseFormationStore {
    async fn list(&self) -> Result<Vec<FormationRow>, StoreError> {
        tracing::debug!(url = %self.table_url, "postgrest list");
        let resp = self
            .client
            .get(&self.table_url)
            .query(&[("select", COLUMNS), ("order", "created_at.desc")])
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn get(&self, id: &str) -> Result<Option<FormationRow>, StoreError> {
        tracing::debug!(url = %self.table_url, id = %id, "postgrest get");
        let resp = self
            .client
            .get(&self.table_url)
            .query(&[("select", COLUMNS)])
            .query(&[Self::id_filter(id)])
            .send()
            .await?;
        let rows: Vec<FormationRow> = Self::read_json(resp).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, row: &NewFormationRow) -> Result<Option<FormationRow>, StoreError> {
        tracing::debug!(url = %self.table_url, "postgrest insert");
        let resp = self
            .client
            .post(&self.table_url)
            .query(&[("select", COLUMNS)])
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let rows: Vec<FormationRow> = Self::read_json(resp).await?;
        Ok(rows.into_iter().next())
    }

    async fn update(&self, id: &str, patch: &FormationRowPatch) -> Result<Option<FormationRow>, StoreError> {
        tracing::debug!(url = %self.table_url, id = %id, "postgrest update");
        let resp = self
            .client
            .patch(&self.table_url)
            .query(&[Self::id_filter(id)])
            .query(&[("select", COLUMNS)])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        let rows: Vec<FormationRow> = Self::read_json(resp).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(url = %self.table_url, id = %id, "postgrest delete");
        let resp = self
            .client
            .delete(&self.table_url)
            .query(&[Self::id_filter(id)])
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let resp = self
            .client
            .get(&self.table_url)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    async fn list_names(&self) -> Result<Vec<String>, StoreError> {
        let resp = self
            .client
            .get(&self.table_url)
            .query(&[("select", "name")])
            .send()
            .await?;
        let rows: Vec<NameRow> = Self::read_json(resp).await?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    async fn insert_many(&self, rows: &[NewFormationRow]) -> Result<(), StoreError> {
        tracing::debug!(url = %self.table_url, count = rows.len(), "postgrest bulk insert");
        let resp = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;
        Self::expect_success(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_comes_from_postgrest_body() {
        let body = r#"{"code":"22P02","details":null,"hint":null,"message":"invalid input syntax for type uuid: \"abc\""}"#;
        assert_eq!(postgrest_error_message(body), "invalid input syntax for type uuid: \"abc\"");
    }

    #[test]
    fn unreadable_error_body_falls_back() {
        assert_eq!(postgrest_error_message("<html>bad gateway</html>"), UNEXPECTED_STORAGE_ERROR);
        assert_eq!(postgrest_error_message(r#"{"code":"500"}"#), UNEXPECTED_STORAGE_ERROR);
    }

    #[test]
    fn table_url_ignores_trailing_slash() {
        let store = SupabaseFormationStore::new("https://project.supabase.co/", "anon").unwrap();
        assert_eq!(store.table_url, "https://project.supabase.co/rest/v1/formations");
    }

    #[test]
    fn rejects_key_that_cannot_be_a_header() {
        assert!(SupabaseFormationStore::new("https://project.supabase.co", "bad\nkey").is_err());
    }
}
