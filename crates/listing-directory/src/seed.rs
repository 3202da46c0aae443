//! Versioned JSON seed documents and the bundled catalogue.
//!
//! A seed document lists entity drafts tagged by `kind`:
//!
//! ```json
//! { "version": 1, "entities": [{ "kind": "developer", "id": "sodic", ... }] }
//! ```
//!
//! Parsing only checks shape and version. Field validation happens in
//! [`CatalogSeed::into_catalog`], which builds the immutable [`Catalog`].

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Deserialize;
use tracing::warn;

use crate::catalog::{Catalog, EntityDraft};
use crate::error::SeedError;

/// Seed document version understood by this crate.
pub const SUPPORTED_SEED_VERSION: u32 = 1;

const BUNDLED_SEED: &str = include_str!("../fixtures/catalog.json");

/// A parsed, not yet validated, seed document.
///
/// # Example
///
/// ```
/// use listing_directory::CatalogSeed;
///
/// let json = r#"{"version": 1, "entities": []}"#;
/// let seed = CatalogSeed::from_json(json).expect("valid seed");
/// assert!(seed.entities().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSeed {
    version: u32,
    entities: Vec<EntityDraft>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalogSeed {
    version: u32,
    entities: Vec<EntityDraft>,
}

impl CatalogSeed {
    /// Parses a seed document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::ParseError`] for malformed JSON, unknown fields,
    /// or missing required fields, and [`SeedError::UnsupportedVersion`]
    /// when the version is not [`SUPPORTED_SEED_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawCatalogSeed = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejected malformed seed document");
            SeedError::ParseError {
                message: e.to_string(),
            }
        })?;

        if raw.version != SUPPORTED_SEED_VERSION {
            warn!(version = raw.version, "rejected seed document version");
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_SEED_VERSION,
                actual: raw.version,
            });
        }

        Ok(Self {
            version: raw.version,
            entities: raw.entities,
        })
    }

    /// Loads a seed document from a UTF-8 path.
    ///
    /// The file is read through a capability handle on its parent
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IoError`] when the file cannot be read, or any
    /// error from [`CatalogSeed::from_json`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, SeedError> {
        let contents = read_seed_file(path).map_err(|e| {
            warn!(%path, error = %e, "failed to read seed file");
            SeedError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        Self::from_json(&contents)
    }

    /// Seed document version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Entity drafts in document order.
    #[must_use]
    pub fn entities(&self) -> &[EntityDraft] {
        &self.entities
    }

    /// Validates the drafts and builds the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Validation`] wrapping the first draft that fails
    /// validation.
    pub fn into_catalog(self) -> Result<Catalog, SeedError> {
        Catalog::new(self.entities).map_err(|e| {
            warn!(entity_id = e.entity_id(), error = %e, "rejected seed entity");
            SeedError::Validation(e)
        })
    }
}

fn read_seed_file(path: &Utf8Path) -> std::io::Result<String> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}

/// Builds the catalogue shipped with the crate.
///
/// It holds the site's sample properties and developers.
///
/// # Errors
///
/// Returns [`SeedError`] if the bundled document fails to parse or
/// validate.
///
/// # Example
///
/// ```
/// use listing_directory::bundled_catalog;
///
/// let catalog = bundled_catalog().expect("bundled catalogue is valid");
/// assert_eq!(catalog.properties().count(), 5);
/// assert_eq!(catalog.developers().count(), 9);
/// ```
pub fn bundled_catalog() -> Result<Catalog, SeedError> {
    CatalogSeed::from_json(BUNDLED_SEED).and_then(CatalogSeed::into_catalog)
}
