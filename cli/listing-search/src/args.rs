//! Command-line arguments for a single search.

use std::path::PathBuf;

use clap::Parser;
use listing_directory::SearchForm;

/// `listing-search` command arguments.
///
/// Filter flags take the same raw values as the site's search form; blank or
/// unparseable values leave that filter unset.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "listing-search",
    about = "Search the bilingual property and developer directory",
    version
)]
pub struct SearchArgs {
    /// City or area to match in either language.
    #[arg(long, value_name = "text")]
    pub location: Option<String>,
    /// Property type to match against type tags.
    #[arg(long = "type", value_name = "text")]
    pub property_type: Option<String>,
    /// `sale` or `rent`.
    #[arg(long = "listing-type", value_name = "sale|rent")]
    pub listing_type: Option<String>,
    /// Inclusive lower price bound.
    #[arg(long = "min-price", value_name = "amount")]
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    #[arg(long = "max-price", value_name = "amount")]
    pub max_price: Option<String>,
    /// Exact bedroom count, or `5+`.
    #[arg(long, value_name = "count")]
    pub bedrooms: Option<String>,
    /// Developer id, for example `palm-hills`.
    #[arg(long, value_name = "id")]
    pub developer: Option<String>,
    /// Free-text search over names and locations.
    #[arg(long, short = 'q', value_name = "text")]
    pub query: Option<String>,
    /// `newest`, `price-low`, or `price-high`.
    #[arg(long, value_name = "order")]
    pub sort: Option<String>,
    /// Display language tag; overrides the configured language.
    #[arg(long, value_name = "tag")]
    pub language: Option<String>,
    /// Seed document path; overrides the configured seed path.
    #[arg(long = "seed", value_name = "path")]
    pub seed_path: Option<PathBuf>,
}

impl SearchArgs {
    /// Builds the raw search form from the filter flags.
    #[must_use]
    pub fn search_form(&self) -> SearchForm {
        SearchForm {
            location: self.location.clone().unwrap_or_default(),
            property_type: self.property_type.clone().unwrap_or_default(),
            listing_type: self.listing_type.clone().unwrap_or_default(),
            min_price: self.min_price.clone().unwrap_or_default(),
            max_price: self.max_price.clone().unwrap_or_default(),
            bedrooms: self.bedrooms.clone().unwrap_or_default(),
            developer: self.developer.clone().unwrap_or_default(),
            query: self.query.clone().unwrap_or_default(),
            sort: self.sort.clone().unwrap_or_default(),
        }
    }
}
