//! Command-line front end for the bilingual listing directory.
//!
//! The binary delegates to [`run`] so a whole search, from settings and
//! arguments to the rendered JSON page, can be exercised without spawning a
//! process.

mod args;
mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use camino::Utf8Path;
use listing_directory::{
    Catalog, CatalogSeed, Criteria, Language, ResultPage, SeedError, bundled_catalog, present,
};
use thiserror::Error;
use tracing::info;

pub use args::SearchArgs;
pub use config::DirectorySettings;

/// Errors reported by the `listing-search` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },

    /// The seed path is not valid UTF-8.
    #[error("seed path '{path}' is not valid UTF-8")]
    NonUtf8SeedPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// The catalogue could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The result page could not be serialised.
    #[error("failed to render results: {message}")]
    Render {
        /// Description of the serialisation error.
        message: String,
    },

    /// The rendered page could not be written to the output stream.
    #[error("failed to write results: {message}")]
    Output {
        /// Description of the I/O error.
        message: String,
    },
}

/// Loads settings from the environment and configuration files only.
///
/// Command-line flags are handled by [`SearchArgs`].
///
/// # Errors
///
/// Returns [`CliError::Settings`] when the configuration cannot be parsed.
pub fn load_settings() -> Result<DirectorySettings, CliError> {
    use ortho_config::OrthoConfig as _;

    DirectorySettings::load_from_iter([std::ffi::OsString::from("listing-search")]).map_err(|e| {
        CliError::Settings {
            message: e.to_string(),
        }
    })
}

/// Runs one search and returns the rendered page.
///
/// Flags take precedence over settings for the language and seed path.
///
/// # Errors
///
/// Returns [`CliError`] when the seed path is not UTF-8 or the catalogue
/// fails to load.
pub fn run(args: &SearchArgs, settings: &DirectorySettings) -> Result<ResultPage, CliError> {
    let language = args
        .language
        .as_deref()
        .map_or_else(|| settings.language(), Language::from_tag);
    let seed_path = args.seed_path.as_deref().or(settings.seed_path.as_deref());

    let catalog = load_catalog(seed_path)?;
    let criteria = Criteria::from_form(&args.search_form());
    let page = present(catalog.filter(&criteria), language);
    info!(
        language = %language,
        results = page.records.len(),
        "listing search completed"
    );
    Ok(page)
}

/// Serialises a page as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError::Render`] if serialisation fails.
pub fn render(page: &ResultPage) -> Result<String, CliError> {
    serde_json::to_string_pretty(page).map_err(|e| CliError::Render {
        message: e.to_string(),
    })
}

/// Renders `page` and writes it, newline-terminated, to `out`.
///
/// # Errors
///
/// Returns [`CliError::Render`] if serialisation fails and
/// [`CliError::Output`] if the writer rejects the bytes.
pub fn write_page<W: Write>(out: &mut W, page: &ResultPage) -> Result<(), CliError> {
    let json = render(page)?;
    writeln!(out, "{json}")
        .and_then(|()| out.flush())
        .map_err(|e| CliError::Output {
            message: e.to_string(),
        })
}

fn load_catalog(seed_path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = seed_path else {
        return Ok(bundled_catalog()?);
    };
    let utf8_path = Utf8Path::from_path(path).ok_or_else(|| CliError::NonUtf8SeedPath {
        path: path.to_path_buf(),
    })?;
    Ok(CatalogSeed::from_file(utf8_path).and_then(CatalogSeed::into_catalog)?)
}
