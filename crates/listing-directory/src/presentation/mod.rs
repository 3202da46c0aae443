//! Display-ready projections of catalogue entities.
//!
//! Everything here is pure: the adapter reads an entity and a language and
//! returns owned strings for the rendering layer. There is no error path;
//! entities reaching this module were validated when the catalogue was
//! built.

use serde::Serialize;

use crate::catalog::{Developer, Entity, EntityKind, ListingType, Price, Property};
use crate::localization::{Language, TextDirection};

mod numerals;

pub use numerals::format_number;
use numerals::{format_area, format_count};

/// Maximum number of type tags shown on a card before the overflow badge.
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Property facts shown under the card title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFacts {
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: u32,
    /// Floor area with its unit, for example `150 m²`.
    pub area_label: String,
}

/// Rendering-ready projection of one entity in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Entity id, for links and keys.
    pub id: String,
    /// Entity discriminant.
    pub kind: EntityKind,
    /// Language the record was rendered in.
    pub language: Language,
    /// Layout direction for the language.
    pub direction: TextDirection,
    /// Resolved name.
    pub name: String,
    /// Resolved location.
    pub location: String,
    /// Representative image URI.
    pub image: String,
    /// Up to [`MAX_VISIBLE_TAGS`] resolved type tags.
    pub tags: Vec<String>,
    /// `+N` when more tags exist than are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_badge: Option<String>,
    /// Featured badge text for highlighted entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_label: Option<String>,
    /// Formatted price, or the price-on-request label (properties only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_label: Option<String>,
    /// Sale or rent badge text (properties only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type_label: Option<String>,
    /// Bedroom, bathroom, and area facts (properties only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts: Option<PropertyFacts>,
    /// Project count text (developers only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_label: Option<String>,
}

/// A rendered result list with its summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// Language the page was rendered in.
    pub language: Language,
    /// Layout direction for the language.
    pub direction: TextDirection,
    /// Locale whose numeral conventions the labels follow, e.g. `ar-EG`.
    pub number_locale: &'static str,
    /// The language's own name, for the active-language indicator.
    pub language_name: &'static str,
    /// Result count line, or the "no results" message.
    pub summary: String,
    /// Rendered records in result order.
    pub records: Vec<DisplayRecord>,
}

/// Projects an entity into a display record for `language`.
///
/// # Examples
///
/// ```
/// use listing_directory::{Language, bundled_catalog, to_view_model};
///
/// let catalog = bundled_catalog().expect("bundled catalogue is valid");
/// let entity = catalog.get("p-1").expect("bundled property");
/// let record = to_view_model(entity, Language::English);
///
/// assert_eq!(record.listing_type_label.as_deref(), Some("For Sale"));
/// ```
#[must_use]
pub fn to_view_model(entity: &Entity, language: Language) -> DisplayRecord {
    let tags = entity.type_tags();
    let overflow = tags.len().saturating_sub(MAX_VISIBLE_TAGS);

    let mut record = DisplayRecord {
        id: entity.id().to_owned(),
        kind: entity.kind(),
        language,
        direction: language.direction(),
        name: entity.name().resolve(language).to_owned(),
        location: entity.location().resolve(language).to_owned(),
        image: entity.image().to_owned(),
        tags: tags
            .iter()
            .take(MAX_VISIBLE_TAGS)
            .map(|tag| tag.resolve(language).to_owned())
            .collect(),
        overflow_badge: (overflow > 0).then(|| format!("+{overflow}")),
        featured_label: entity
            .is_featured()
            .then(|| language.pick("مميز", "Featured").to_owned()),
        price_label: None,
        listing_type_label: None,
        facts: None,
        projects_label: None,
    };

    match entity {
        Entity::Property(property) => apply_property(&mut record, property, language),
        Entity::Developer(developer) => apply_developer(&mut record, developer, language),
    }
    record
}

fn apply_property(record: &mut DisplayRecord, property: &Property, language: Language) {
    record.price_label = Some(price_label(property, language));
    record.listing_type_label = Some(listing_type_label(property.listing_type(), language).to_owned());
    record.facts = Some(PropertyFacts {
        bedrooms: property.bedrooms(),
        bathrooms: property.bathrooms(),
        area_label: format!(
            "{} {}",
            format_area(property.area(), language),
            language.pick("م²", "m²")
        ),
    });
}

fn apply_developer(record: &mut DisplayRecord, developer: &Developer, language: Language) {
    record.projects_label = Some(format!(
        "{} {}",
        format_number(u64::from(developer.projects_count()), language),
        language.pick("مشروع", "Projects")
    ));
}

fn price_label(property: &Property, language: Language) -> String {
    match property.price() {
        Price::OnRequest => language.pick("اتصل لمعرفة السعر", "Call for Price").to_owned(),
        Price::Amount(amount) => {
            let mut label = format!(
                "{} {}",
                format_number(amount, language),
                property.currency()
            );
            if property.listing_type() == ListingType::Rent {
                label.push('/');
                label.push_str(language.pick("شهر", "month"));
            }
            label
        }
    }
}

const fn listing_type_label(listing_type: ListingType, language: Language) -> &'static str {
    match listing_type {
        ListingType::Sale => language.pick("للبيع", "For Sale"),
        ListingType::Rent => language.pick("للإيجار", "For Rent"),
    }
}

/// Renders a result list and its summary line.
///
/// The summary counts properties, developers, or generic results depending
/// on what the list holds.
#[must_use]
pub fn present<'a, I>(entities: I, language: Language) -> ResultPage
where
    I: IntoIterator<Item = &'a Entity>,
{
    let records: Vec<DisplayRecord> = entities
        .into_iter()
        .map(|entity| to_view_model(entity, language))
        .collect();

    ResultPage {
        language,
        direction: language.direction(),
        number_locale: language.number_locale(),
        language_name: language.native_name(),
        summary: summary(&records, language),
        records,
    }
}

fn summary(records: &[DisplayRecord], language: Language) -> String {
    if records.is_empty() {
        return language.pick("لا توجد نتائج", "No results found").to_owned();
    }
    let count = format_count(records.len(), language);
    let noun = if records.iter().all(|record| record.kind == EntityKind::Property) {
        language.pick("عقار", "properties")
    } else if records.iter().all(|record| record.kind == EntityKind::Developer) {
        language.pick("مطور", "developers")
    } else {
        language.pick("نتيجة", "results")
    };
    match language {
        Language::Arabic => format!("تم العثور على {count} {noun}"),
        Language::English => format!("Found {count} {noun}"),
    }
}
