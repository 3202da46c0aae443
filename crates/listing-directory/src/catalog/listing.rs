//! Fields shared by every catalogue entity.

use crate::error::ValidationError;
use crate::localization::{LocalizedText, LocalizedTextDraft};

use super::EntityKind;
use super::validation::{validate_non_empty_field, validate_type_tags};

/// Validated fields common to properties and developers.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Listing {
    pub(super) id: String,
    pub(super) name: LocalizedText,
    pub(super) location: LocalizedText,
    pub(super) image: String,
    pub(super) type_tags: Vec<LocalizedText>,
    pub(super) featured: bool,
}

/// Unvalidated shared fields, moved out of a property or developer draft.
pub(super) struct ListingParts {
    pub(super) id: String,
    pub(super) name: LocalizedTextDraft,
    pub(super) location: LocalizedTextDraft,
    pub(super) image: String,
    pub(super) type_tags: Vec<LocalizedTextDraft>,
    pub(super) featured: bool,
}

impl Listing {
    /// Validates the shared fields; `kind` prefixes field paths in errors.
    pub(super) fn new(parts: ListingParts, kind: EntityKind) -> Result<Self, ValidationError> {
        let ListingParts {
            id,
            name,
            location,
            image,
            type_tags,
            featured,
        } = parts;

        let checked_id = validate_non_empty_field(id, "", kind.id_field())?;
        let prefix = kind.as_str();
        let name_text = LocalizedText::new(name, &checked_id, &format!("{prefix}.name"))?;
        let location_text = LocalizedText::new(location, &checked_id, &format!("{prefix}.location"))?;
        let image_url = validate_non_empty_field(image, &checked_id, kind.image_field())?;
        let tags = validate_type_tags(type_tags, &checked_id, kind)?;

        Ok(Self {
            id: checked_id,
            name: name_text,
            location: location_text,
            image: image_url,
            type_tags: tags,
            featured,
        })
    }
}
