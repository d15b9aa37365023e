//! Formation records: public API shape and storage row shapes.

use serde::{Deserialize, Deserializer, Serialize};

/// Public shape returned by the API. Keys are camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub skills_description: String,
    /// ISO calendar date, e.g. `2026-01-08`.
    pub start_date: String,
    pub end_date: String,
}

/// Full client data for creation (a `Formation` without its id).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormationPayload {
    pub name: String,
    pub description: String,
    pub skills_description: String,
    pub start_date: String,
    pub end_date: String,
}

/// Partial client data for update. `None` means the key was not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub skills_description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FormationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.skills_description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Row of the `formations` table as read back from storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FormationRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub skills_description: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

/// Accepts a text/uuid id or a numeric identity id (PostgREST sends `int8` as a JSON number).
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        UInt(u64),
    }
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::UInt(n) => n.to_string(),
    })
}

/// Column values for an insert. Storage assigns `id` and `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFormationRow {
    pub name: String,
    pub description: String,
    pub skills_description: String,
    pub start_date: String,
    pub end_date: String,
}

/// Column values for an update; only present fields are written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormationRowPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl FormationRowPatch {
    /// (column, value) pairs for the fields present, in table column order.
    pub fn columns(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("skills_description", &self.skills_description),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ]
        .into_iter()
        .filter_map(|(col, v)| v.as_deref().map(|v| (col, v)))
        .collect()
    }

    /// Writes the present fields onto `row`.
    pub fn apply_to(&self, row: &mut FormationRow) {
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = &self.description {
            row.description = Some(v.clone());
        }
        if let Some(v) = &self.skills_description {
            row.skills_description = Some(v.clone());
        }
        if let Some(v) = &self.start_date {
            row.start_date = v.clone();
        }
        if let Some(v) = &self.end_date {
            row.end_date = v.clone();
        }
    }
}
