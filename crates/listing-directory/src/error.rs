//! Error types for the listing-directory crate.
//!
//! Validation failures are raised while the catalogue is built and abort
//! construction; seed errors wrap them together with I/O and JSON failures
//! from the loader. Filtering and presentation have no error path.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a seed draft fails validation during catalogue
/// construction.
///
/// Every variant names the entity id and, where relevant, the offending
/// field so data-quality problems can be traced back to the seed document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The entity id is blank.
    #[error("entity at position {position} has an empty id")]
    EmptyId {
        /// Zero-based position of the draft in the seed sequence.
        position: usize,
    },

    /// A required text field is blank.
    #[error("{field} of entity '{entity_id}' must not be empty")]
    EmptyField {
        /// Id of the offending entity.
        entity_id: String,
        /// Dotted path of the offending field.
        field: &'static str,
    },

    /// One side of a localized pair is blank.
    #[error("{field} of entity '{entity_id}' is missing its {language} text")]
    MissingTranslation {
        /// Id of the offending entity.
        entity_id: String,
        /// Dotted path of the offending field.
        field: String,
        /// Language code of the blank side.
        language: &'static str,
    },

    /// The type tag list is empty.
    #[error("type tags of entity '{entity_id}' must contain at least one tag")]
    EmptyTypeTags {
        /// Id of the offending entity.
        entity_id: String,
    },

    /// A numeric field holds a negative value.
    #[error("{field} of entity '{entity_id}' must not be negative (got {value})")]
    NegativeValue {
        /// Id of the offending entity.
        entity_id: String,
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The floor area is zero, negative, or not a finite number.
    #[error("area of entity '{entity_id}' must be a positive number (got {value})")]
    InvalidArea {
        /// Id of the offending entity.
        entity_id: String,
        /// The rejected value.
        value: f64,
    },

    /// Two drafts share the same id.
    #[error("entity id '{entity_id}' appears more than once")]
    DuplicateId {
        /// The repeated id.
        entity_id: String,
    },
}

impl ValidationError {
    /// Returns the id of the entity that failed validation, when known.
    ///
    /// # Examples
    ///
    /// ```
    /// use listing_directory::ValidationError;
    ///
    /// let err = ValidationError::DuplicateId {
    ///     entity_id: "7".to_owned(),
    /// };
    /// assert_eq!(err.entity_id(), Some("7"));
    /// ```
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Self::EmptyId { .. } => None,
            Self::EmptyField { entity_id, .. }
            | Self::MissingTranslation { entity_id, .. }
            | Self::EmptyTypeTags { entity_id }
            | Self::NegativeValue { entity_id, .. }
            | Self::InvalidArea { entity_id, .. }
            | Self::DuplicateId { entity_id } => Some(entity_id.as_str()),
        }
    }
}

/// Errors that can occur when loading a catalogue seed document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    IoError {
        /// Path to the seed file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed or missing required fields.
    #[error("invalid seed JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The seed document version is not supported.
    #[error("unsupported seed version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A seed record failed validation.
    #[error("seed validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_names_entity_and_field() {
        let err = ValidationError::EmptyField {
            entity_id: "3".to_owned(),
            field: "property.currency",
        };
        assert_eq!(
            err.to_string(),
            "property.currency of entity '3' must not be empty"
        );
    }

    #[test]
    fn missing_translation_names_language() {
        let err = ValidationError::MissingTranslation {
            entity_id: "1".to_owned(),
            field: "name".to_owned(),
            language: "en",
        };
        assert_eq!(err.to_string(), "name of entity '1' is missing its en text");
    }

    #[test]
    fn negative_value_formats_correctly() {
        let err = ValidationError::NegativeValue {
            entity_id: "2".to_owned(),
            field: "property.bedrooms",
            value: -1,
        };
        assert_eq!(
            err.to_string(),
            "property.bedrooms of entity '2' must not be negative (got -1)"
        );
    }

    #[test]
    fn empty_id_has_no_entity_id() {
        let err = ValidationError::EmptyId { position: 4 };
        assert_eq!(err.entity_id(), None);
        assert_eq!(err.to_string(), "entity at position 4 has an empty id");
    }

    #[test]
    fn seed_error_wraps_validation_error() {
        let err = SeedError::from(ValidationError::DuplicateId {
            entity_id: "9".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "seed validation failed: entity id '9' appears more than once"
        );
    }

    #[test]
    fn seed_error_version_formats_correctly() {
        let err = SeedError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported seed version: expected 1, found 3"
        );
    }
}
