//! Validation helpers shared by catalogue entity constructors.

use super::EntityKind;
use crate::error::ValidationError;
use crate::localization::{LocalizedText, LocalizedTextDraft};

pub(super) fn validate_non_empty_field(
    value: String,
    entity_id: &str,
    field: &'static str,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            entity_id: entity_id.to_owned(),
            field,
        });
    }
    Ok(value)
}

pub(super) fn non_negative_count(
    value: i32,
    entity_id: &str,
    field: &'static str,
) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::NegativeValue {
        entity_id: entity_id.to_owned(),
        field,
        value: i64::from(value),
    })
}

pub(super) fn non_negative_amount(
    value: i64,
    entity_id: &str,
    field: &'static str,
) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeValue {
        entity_id: entity_id.to_owned(),
        field,
        value,
    })
}

pub(super) fn ensure_positive_area(value: f64, entity_id: &str) -> Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidArea {
            entity_id: entity_id.to_owned(),
            value,
        });
    }
    Ok(value)
}

pub(super) fn validate_type_tags(
    drafts: Vec<LocalizedTextDraft>,
    entity_id: &str,
    kind: EntityKind,
) -> Result<Vec<LocalizedText>, ValidationError> {
    if drafts.is_empty() {
        return Err(ValidationError::EmptyTypeTags {
            entity_id: entity_id.to_owned(),
        });
    }
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            let field = format!("{}.typeTags[{index}]", kind.as_str());
            LocalizedText::new(draft, entity_id, &field)
        })
        .collect()
}
