//! Request validation for create and update bodies.

use crate::error::AppError;
use crate::model::{FormationPatch, FormationPayload};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Les champs name, startDate et endDate sont requis.";
pub const EMPTY_PATCH_MESSAGE: &str = "Aucune mise à jour fournie.";

pub struct RequestValidator;

impl RequestValidator {
    /// name, startDate and endDate must be non-empty. Date order is not checked.
    pub fn validate(payload: &FormationPayload) -> Result<(), AppError> {
        if payload.name.is_empty() || payload.start_date.is_empty() || payload.end_date.is_empty() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        }
        Ok(())
    }

    /// At least one field must be present. Present fields may be empty.
    pub fn validate_partial(patch: &FormationPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::Validation(EMPTY_PATCH_MESSAGE.into()));
        }
        Ok(())
    }
}
