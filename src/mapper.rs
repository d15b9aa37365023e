//! Conversion between the public camelCase shape and the snake_case `formations` columns.

use crate::model::{Formation, FormationPatch, FormationPayload, FormationRow, FormationRowPatch, NewFormationRow};

pub fn to_row(payload: &FormationPayload) -> NewFormationRow {
    NewFormationRow {
        name: payload.name.clone(),
        description: payload.description.clone(),
        skills_description: payload.skills_description.clone(),
        start_date: payload.start_date.clone(),
        end_date: payload.end_date.clone(),
    }
}

/// Keys absent from the patch stay absent, so an update leaves those columns untouched.
pub fn patch_to_row(patch: &FormationPatch) -> FormationRowPatch {
    FormationRowPatch {
        name: patch.name.clone(),
        description: patch.description.clone(),
        skills_description: patch.skills_description.clone(),
        start_date: patch.start_date.clone(),
        end_date: patch.end_date.clone(),
    }
}

/// Null optional text columns become empty strings.
pub fn from_row(row: FormationRow) -> Formation {
    Formation {
        id: row.id,
        name: row.name,
        description: row.description.unwrap_or_default(),
        skills_description: row.skills_description.unwrap_or_default(),
        start_date: row.start_date,
        end_date: row.end_date,
    }
}
