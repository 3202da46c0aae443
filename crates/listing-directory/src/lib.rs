//! Bilingual listing directory for properties and developers.
//!
//! This crate holds the read-only core behind the Arabic/English listings
//! site: an immutable catalogue built once from seed records, a filter engine
//! over it, and a presentation adapter that turns entities into
//! display-ready records for one language.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Validated construction of a [`Catalog`] from seed drafts
//! - Loading seed drafts from a versioned JSON document
//! - Bilingual text resolution through [`LocalizedText`] and [`Language`]
//! - AND-combined, order-preserving filtering with [`Criteria`]
//! - Projection into [`DisplayRecord`]s with localised numerals
//!
//! # Example
//!
//! ```
//! use listing_directory::{CatalogSeed, Criteria, Language, ListingType, present};
//!
//! let json = r#"{
//!     "version": 1,
//!     "entities": [{
//!         "kind": "property",
//!         "id": "1",
//!         "name": {"ar": "شقة", "en": "Apartment"},
//!         "location": {"ar": "التجمع الخامس", "en": "New Cairo"},
//!         "image": "https://example.test/1.jpg",
//!         "typeTags": [{"ar": "شقة", "en": "Apartment"}],
//!         "price": 3500000,
//!         "currency": "EGP",
//!         "bedrooms": 3,
//!         "bathrooms": 2,
//!         "area": 150.0,
//!         "listingType": "sale"
//!     }]
//! }"#;
//!
//! let catalog = CatalogSeed::from_json(json)
//!     .and_then(CatalogSeed::into_catalog)
//!     .expect("valid catalogue");
//! let criteria = Criteria {
//!     listing_type: Some(ListingType::Sale),
//!     ..Criteria::default()
//! };
//!
//! let page = present(catalog.filter(&criteria), Language::English);
//! assert_eq!(page.records.len(), 1);
//! assert_eq!(page.records[0].price_label.as_deref(), Some("3,500,000 EGP"));
//! ```

mod catalog;
mod error;
mod filter;
mod localization;
mod presentation;
mod seed;

pub use catalog::{
    Catalog, Developer, DeveloperDraft, Entity, EntityDraft, EntityKind, ListingType, Price,
    Property, PropertyDraft,
};
pub use error::{SeedError, ValidationError};
pub use filter::{BedroomCount, Criteria, SearchForm, SortOrder, filter};
pub use localization::{Language, LocalizedText, LocalizedTextDraft, TextDirection, resolve};
pub use presentation::{
    DisplayRecord, MAX_VISIBLE_TAGS, PropertyFacts, ResultPage, format_number, present,
    to_view_model,
};
pub use seed::{CatalogSeed, SUPPORTED_SEED_VERSION, bundled_catalog};
