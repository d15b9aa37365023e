//! Liveness and storage reachability checks. Both always answer 200.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct StorageHealthBody {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// A storage failure is reported in `error`, never through the status code.
pub async fn storage_health(State(state): State<AppState>) -> Json<StorageHealthBody> {
    let body = match state.formations.reachability().await {
        None => StorageHealthBody {
            status: "ok",
            message: "Supabase ready",
            error: None,
        },
        Some(error) => StorageHealthBody {
            status: "ok",
            message: "Supabase reachability checked",
            error: Some(error),
        },
    };
    Json(body)
}
