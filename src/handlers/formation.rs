//! Formation CRUD handlers: list, read, create, update, delete.
//!
//! Bodies are read loosely: every known field is coerced to a string the way a
//! JavaScript client library would (`String(value)`), unknown keys are ignored.
//! Only `application/json` bodies are parsed; any other content type reads as `{}`.

use crate::error::AppError;
use crate::model::{Formation, FormationPatch, FormationPayload};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use serde_json::{Map, Number, Value};

pub const INVALID_JSON_MESSAGE: &str = "Corps de requête JSON invalide.";

type Body = Map<String, Value>;

/// `application/json`, parameters such as `charset` ignored.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Non-JSON content types and empty bodies read as `{}`; an array has no known keys, so it reads as `{}` too.
fn body_object(headers: &HeaderMap, body: &Bytes) -> Result<Body, AppError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Array(_)) => Ok(Map::new()),
        _ => Err(AppError::BadRequest(INVALID_JSON_MESSAGE.into())),
    }
}

/// JavaScript `Number.prototype.toString()`: shortest round-trip digits, plain notation
/// for decimal exponents in [-6, 21), `e+N` / `e-N` notation outside.
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;
    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { "+" } else { "-" };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    };
    if f < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => js_number(f),
        None => n.to_string(),
    }
}

/// String form of a JSON value; null becomes "".
pub fn to_string_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(to_string_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn field(body: &Body, key: &str) -> String {
    body.get(key).map(to_string_value).unwrap_or_default()
}

/// A key that is present (even as `null`) is kept; an absent key is not.
fn patch_field(body: &Body, key: &str) -> Option<String> {
    body.get(key).map(to_string_value)
}

pub fn build_payload(body: &Body) -> FormationPayload {
    FormationPayload {
        name: field(body, "name"),
        description: field(body, "description"),
        skills_description: field(body, "skillsDescription"),
        start_date: field(body, "startDate"),
        end_date: field(body, "endDate"),
    }
}

pub fn build_patch(body: &Body) -> FormationPatch {
    FormationPatch {
        name: patch_field(body, "name"),
        description: patch_field(body, "description"),
        skills_description: patch_field(body, "skillsDescription"),
        start_date: patch_field(body, "startDate"),
        end_date: patch_field(body, "endDate"),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Formation>>, AppError> {
    let formations = state.formations.list().await?;
    Ok(Json(formations))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Formation>, AppError> {
    let formation = state.formations.get(&id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(formation))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Formation>), AppError> {
    let payload = build_payload(&body_object(&headers, &body)?);
    RequestValidator::validate(&payload)?;
    let created = state.formations.create(&payload).await?;
    tracing::info!(id = %created.id, "formation created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Formation>, AppError> {
    let patch = build_patch(&body_object(&headers, &body)?);
    RequestValidator::validate_partial(&patch)?;
    let updated = state.formations.update(&id, &patch).await?.ok_or(AppError::NotFound)?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.formations.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
