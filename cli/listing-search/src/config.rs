//! Directory settings loaded via OrthoConfig.

use std::path::PathBuf;

use listing_directory::Language;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values for the search front end.
///
/// Values come from `LISTING_DIRECTORY_*` environment variables or a
/// configuration file; command-line flags override them.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LISTING_DIRECTORY")]
pub struct DirectorySettings {
    /// Seed document to load instead of the bundled catalogue.
    pub seed_path: Option<PathBuf>,
    /// Display language tag, for example `ar` or `en`.
    #[ortho_config(default = "ar".to_owned())]
    pub language: String,
}

impl DirectorySettings {
    /// Return the configured display language, falling back to Arabic.
    #[must_use]
    pub fn language(&self) -> Language {
        Language::from_tag(&self.language)
    }
}
