//! Property listing entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityKind;
use super::listing::{Listing, ListingParts};
use super::validation::{
    ensure_positive_area, non_negative_amount, non_negative_count, validate_non_empty_field,
};
use crate::error::ValidationError;
use crate::localization::{LocalizedText, LocalizedTextDraft};

/// Whether a property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    /// Offered for sale.
    Sale,
    /// Offered for monthly rent.
    Rent,
}

/// Asking price of a property.
///
/// Seed data encodes "price on request" as a zero amount; the domain keeps
/// that sentinel out of the numeric range so price filters cannot mistake it
/// for a real price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Price {
    /// The seller publishes no price.
    OnRequest,
    /// A published price in the listing currency.
    Amount(u64),
}

impl Price {
    /// Maps a raw amount onto a price, treating zero as "on request".
    ///
    /// # Examples
    ///
    /// ```
    /// use listing_directory::Price;
    ///
    /// assert_eq!(Price::from_amount(0), Price::OnRequest);
    /// assert_eq!(Price::from_amount(45_000), Price::Amount(45_000));
    /// ```
    #[must_use]
    pub const fn from_amount(amount: u64) -> Self {
        if amount == 0 {
            Self::OnRequest
        } else {
            Self::Amount(amount)
        }
    }

    /// Returns the published amount, if any.
    #[must_use]
    pub const fn amount(self) -> Option<u64> {
        match self {
            Self::OnRequest => None,
            Self::Amount(amount) => Some(amount),
        }
    }
}

/// Input payload for [`Property::new`].
///
/// Numeric fields are signed so negative seed values surface as
/// [`ValidationError::NegativeValue`] rather than as parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PropertyDraft {
    /// Catalogue-unique id.
    pub id: String,
    /// Listing title.
    pub name: LocalizedTextDraft,
    /// Area or neighbourhood.
    pub location: LocalizedTextDraft,
    /// Representative image URI.
    pub image: String,
    /// Category labels, for example "Apartment" or "Villa".
    pub type_tags: Vec<LocalizedTextDraft>,
    /// Display emphasis flag.
    #[serde(default)]
    pub featured: bool,
    /// Asking price; zero means "price on request".
    pub price: i64,
    /// Currency code or symbol.
    pub currency: String,
    /// Number of bedrooms.
    pub bedrooms: i32,
    /// Number of bathrooms.
    pub bathrooms: i32,
    /// Floor area in square metres.
    pub area: f64,
    /// Sale or rent.
    pub listing_type: ListingType,
    /// Id of the developer behind the project, if known.
    pub developer_id: Option<String>,
    /// Publication date, used by the "newest" sort order.
    pub listed_on: Option<NaiveDate>,
}

/// A validated property listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    listing: Listing,
    price: Price,
    currency: String,
    bedrooms: u32,
    bathrooms: u32,
    area: f64,
    listing_type: ListingType,
    developer_id: Option<String>,
    listed_on: Option<NaiveDate>,
}

impl Property {
    /// Validate and construct a property.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a text field or translation is
    /// blank, the tag list is empty, a count or price is negative, or the
    /// area is not a positive number.
    pub fn new(draft: PropertyDraft) -> Result<Self, ValidationError> {
        Self::try_from(draft)
    }

    /// Catalogue-unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.listing.id
    }

    /// Listing title.
    #[must_use]
    pub const fn name(&self) -> &LocalizedText {
        &self.listing.name
    }

    /// Area or neighbourhood.
    #[must_use]
    pub const fn location(&self) -> &LocalizedText {
        &self.listing.location
    }

    /// Representative image URI.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.listing.image
    }

    /// Category labels in seed order.
    #[must_use]
    pub fn type_tags(&self) -> &[LocalizedText] {
        &self.listing.type_tags
    }

    /// Whether the listing is highlighted.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.listing.featured
    }

    /// Asking price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Currency code or symbol.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Number of bedrooms.
    #[must_use]
    pub const fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    /// Number of bathrooms.
    #[must_use]
    pub const fn bathrooms(&self) -> u32 {
        self.bathrooms
    }

    /// Floor area in square metres.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Sale or rent.
    #[must_use]
    pub const fn listing_type(&self) -> ListingType {
        self.listing_type
    }

    /// Id of the associated developer.
    #[must_use]
    pub fn developer_id(&self) -> Option<&str> {
        self.developer_id.as_deref()
    }

    /// Publication date.
    #[must_use]
    pub const fn listed_on(&self) -> Option<NaiveDate> {
        self.listed_on
    }
}

impl TryFrom<PropertyDraft> for Property {
    type Error = ValidationError;

    fn try_from(draft: PropertyDraft) -> Result<Self, Self::Error> {
        let listing = Listing::new(
            ListingParts {
                id: draft.id,
                name: draft.name,
                location: draft.location,
                image: draft.image,
                type_tags: draft.type_tags,
                featured: draft.featured,
            },
            EntityKind::Property,
        )?;
        let id = listing.id.as_str();

        let amount = non_negative_amount(draft.price, id, "property.price")?;
        let currency = validate_non_empty_field(draft.currency, id, "property.currency")?;
        let bedrooms = non_negative_count(draft.bedrooms, id, "property.bedrooms")?;
        let bathrooms = non_negative_count(draft.bathrooms, id, "property.bathrooms")?;
        let area = ensure_positive_area(draft.area, id)?;
        let developer_id = draft
            .developer_id
            .map(|value| validate_non_empty_field(value, id, "property.developerId"))
            .transpose()?;

        Ok(Self {
            listing,
            price: Price::from_amount(amount),
            currency,
            bedrooms,
            bathrooms,
            area,
            listing_type: draft.listing_type,
            developer_id,
            listed_on: draft.listed_on,
        })
    }
}
