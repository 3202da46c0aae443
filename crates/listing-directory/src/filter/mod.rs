//! Predicate-based filtering over catalogue entities.
//!
//! Criteria are AND-combined and every option is optional. The result is an
//! order-preserving subsequence of the input unless a [`SortOrder`] is
//! requested, in which case a stable sort is applied afterwards.
//!
//! Filtering is a linear scan. A location or type index would belong inside
//! [`Catalog`](crate::Catalog) and could back [`Catalog::filter`](crate::Catalog::filter)
//! without changing this contract.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Developer, Entity, ListingType, Property};

mod form;


pub use form::SearchForm;

/// Sentinel accepted by [`BedroomCount::parse`] for "five or more".
const FIVE_OR_MORE: &str = "5+";

/// Bedroom constraint.
///
/// On the wire this is an integer or the `"5+"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BedroomValue", into = "BedroomValue")]
pub enum BedroomCount {
    /// Exactly this many bedrooms.
    Exactly(u32),
    /// Five bedrooms or more.
    FiveOrMore,
}

impl BedroomCount {
    /// Parses a form value: a non-negative integer or the `5+` sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use listing_directory::BedroomCount;
    ///
    /// assert_eq!(BedroomCount::parse("5+"), Some(BedroomCount::FiveOrMore));
    /// assert_eq!(BedroomCount::parse(" 3 "), Some(BedroomCount::Exactly(3)));
    /// assert_eq!(BedroomCount::parse("many"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed == FIVE_OR_MORE {
            return Some(Self::FiveOrMore);
        }
        trimmed.parse().ok().map(Self::Exactly)
    }

    /// Returns `true` when `bedrooms` satisfies the constraint.
    #[must_use]
    pub const fn matches(self, bedrooms: u32) -> bool {
        match self {
            Self::Exactly(expected) => bedrooms == expected,
            Self::FiveOrMore => bedrooms >= 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum BedroomValue {
    Count(u32),
    Label(String),
}

impl TryFrom<BedroomValue> for BedroomCount {
    type Error = String;

    fn try_from(value: BedroomValue) -> Result<Self, Self::Error> {
        match value {
            BedroomValue::Count(count) => Ok(Self::Exactly(count)),
            BedroomValue::Label(label) => Self::parse(&label).ok_or_else(|| {
                format!("bedrooms must be an integer or `{FIVE_OR_MORE}`, got `{label}`")
            }),
        }
    }
}

impl From<BedroomCount> for BedroomValue {
    fn from(value: BedroomCount) -> Self {
        match value {
            BedroomCount::Exactly(count) => Self::Count(count),
            BedroomCount::FiveOrMore => Self::Label(FIVE_OR_MORE.to_owned()),
        }
    }
}

/// Explicit ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recently listed first; undated entities last.
    #[serde(rename = "newest")]
    Newest,
    /// Cheapest first; unpriced entities last.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Most expensive first; unpriced entities last.
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl SortOrder {
    /// Parses a form value (`newest`, `price-low`, `price-high`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "price-low" => Some(Self::PriceLowToHigh),
            "price-high" => Some(Self::PriceHighToLow),
            _ => None,
        }
    }
}

/// Optional, AND-combined filter options.
///
/// Blank text options are treated as absent. Options that only describe
/// properties (`property_type`, `listing_type`, price bounds, `bedrooms`)
/// exclude developers whenever they are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    /// Case-insensitive substring of either localized location.
    pub location: Option<String>,
    /// Case-insensitive substring of either localized text of any type tag.
    pub property_type: Option<String>,
    /// Exact listing type.
    pub listing_type: Option<ListingType>,
    /// Inclusive lower price bound.
    pub min_price: Option<u64>,
    /// Inclusive upper price bound.
    pub max_price: Option<u64>,
    /// Bedroom constraint.
    pub bedrooms: Option<BedroomCount>,
    /// Developer association (or a developer's own id).
    pub developer_id: Option<String>,
    /// Case-insensitive substring of either localized name or location.
    pub query: Option<String>,
    /// Ordering applied to the matches.
    pub sort: Option<SortOrder>,
}

impl Criteria {
    /// Returns `true` when no predicate is set; `sort` is not a predicate.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        Predicates::new(self).is_empty()
    }
}

/// Normalised predicates derived from [`Criteria`].
struct Predicates<'c> {
    location: Option<String>,
    property_type: Option<String>,
    query: Option<String>,
    listing_type: Option<ListingType>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    bedrooms: Option<BedroomCount>,
    developer_id: Option<&'c str>,
}

impl<'c> Predicates<'c> {
    fn new(criteria: &'c Criteria) -> Self {
        Self {
            location: needle(criteria.location.as_deref()),
            property_type: needle(criteria.property_type.as_deref()),
            query: needle(criteria.query.as_deref()),
            listing_type: criteria.listing_type,
            min_price: criteria.min_price,
            max_price: criteria.max_price,
            bedrooms: criteria.bedrooms,
            developer_id: criteria
                .developer_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty()),
        }
    }

    fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.query.is_none()
            && self.developer_id.is_none()
            && !self.is_property_only()
    }

    fn is_price_bounded(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    fn is_property_only(&self) -> bool {
        self.property_type.is_some()
            || self.listing_type.is_some()
            || self.is_price_bounded()
            || self.bedrooms.is_some()
    }

    fn matches(&self, entity: &Entity) -> bool {
        self.matches_shared(entity)
            && match entity {
                Entity::Property(property) => self.matches_property(property),
                Entity::Developer(developer) => self.matches_developer(developer),
            }
    }

    fn matches_shared(&self, entity: &Entity) -> bool {
        let location_ok = self
            .location
            .as_deref()
            .is_none_or(|needle| entity.location().contains_lowercase(needle));
        location_ok
            && self.query.as_deref().is_none_or(|needle| {
                entity.name().contains_lowercase(needle)
                    || entity.location().contains_lowercase(needle)
            })
    }

    fn matches_property(&self, property: &Property) -> bool {
        self.property_type.as_deref().is_none_or(|needle| {
            property
                .type_tags()
                .iter()
                .any(|tag| tag.contains_lowercase(needle))
        }) && self
            .listing_type
            .is_none_or(|listing_type| property.listing_type() == listing_type)
            && self.matches_price(property)
            && self
                .bedrooms
                .is_none_or(|bedrooms| bedrooms.matches(property.bedrooms()))
            && self
                .developer_id
                .is_none_or(|id| property.developer_id() == Some(id))
    }

    fn matches_price(&self, property: &Property) -> bool {
        if !self.is_price_bounded() {
            return true;
        }
        property.price().amount().is_some_and(|amount| {
            self.min_price.is_none_or(|min| amount >= min)
                && self.max_price.is_none_or(|max| amount <= max)
        })
    }

    fn matches_developer(&self, developer: &Developer) -> bool {
        !self.is_property_only() && self.developer_id.is_none_or(|id| developer.id() == id)
    }
}

fn needle(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

/// Returns the entities that satisfy every criterion.
///
/// Without a sort order the result keeps input order, and empty criteria
/// return the input unchanged. Because the input may itself be a filter
/// result, filters compose: filtering twice equals filtering once with both
/// sets of independent criteria.
///
/// # Examples
///
/// ```
/// use listing_directory::{Criteria, bundled_catalog, filter};
///
/// let catalog = bundled_catalog().expect("bundled catalogue is valid");
/// let everything = filter(catalog.all(), &Criteria::default());
/// assert_eq!(everything.len(), catalog.len());
/// ```
#[must_use]
pub fn filter<'a, I>(entities: I, criteria: &Criteria) -> Vec<&'a Entity>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let predicates = Predicates::new(criteria);
    let mut matches: Vec<&Entity> = if predicates.is_empty() {
        entities.into_iter().collect()
    } else {
        entities
            .into_iter()
            .filter(|entity| predicates.matches(entity))
            .collect()
    };

    if let Some(order) = criteria.sort {
        sort_entities(&mut matches, order);
    }

    debug!(matched = matches.len(), ?criteria, "listing filter applied");
    matches
}

fn sort_entities(entities: &mut [&Entity], order: SortOrder) {
    match order {
        SortOrder::Newest => entities.sort_by(|a, b| {
            present_first(listed_on(a), listed_on(b), |left, right| right.cmp(left))
        }),
        SortOrder::PriceLowToHigh => entities.sort_by(|a, b| {
            present_first(price_amount(a), price_amount(b), |left, right| left.cmp(right))
        }),
        SortOrder::PriceHighToLow => entities.sort_by(|a, b| {
            present_first(price_amount(a), price_amount(b), |left, right| right.cmp(left))
        }),
    }
}

fn listed_on(entity: &Entity) -> Option<chrono::NaiveDate> {
    entity.as_property().and_then(Property::listed_on)
}

fn price_amount(entity: &Entity) -> Option<u64> {
    entity
        .as_property()
        .and_then(|property| property.price().amount())
}

/// Orders present keys with `compare` and puts absent keys last.
fn present_first<T>(
    left: Option<T>,
    right: Option<T>,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (left, right) {
        (Some(left_key), Some(right_key)) => compare(&left_key, &right_key),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
