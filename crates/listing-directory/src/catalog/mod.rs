//! Catalogue entities and the immutable catalogue that holds them.
//!
//! Entities are a closed sum type: every consumer branches on
//! [`Entity::Property`] or [`Entity::Developer`] instead of probing optional
//! fields. A [`Catalog`] is built once from drafts and never mutated.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ValidationError;
use crate::filter::{Criteria, filter};
use crate::localization::LocalizedText;

mod developer;
mod listing;
mod property;
mod validation;

#[cfg(test)]
mod tests;

pub use developer::{Developer, DeveloperDraft};
pub use property::{ListingType, Price, Property, PropertyDraft};

/// Discriminant of an [`Entity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A property listing.
    Property,
    /// A developer profile.
    Developer,
}

impl EntityKind {
    /// Lowercase name used in field paths and serialised records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Developer => "developer",
        }
    }

    pub(crate) const fn id_field(self) -> &'static str {
        match self {
            Self::Property => "property.id",
            Self::Developer => "developer.id",
        }
    }

    pub(crate) const fn image_field(self) -> &'static str {
        match self {
            Self::Property => "property.image",
            Self::Developer => "developer.image",
        }
    }
}

/// Seed record for one catalogue entity, tagged by `kind` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityDraft {
    /// Property seed record.
    Property(PropertyDraft),
    /// Developer seed record.
    Developer(DeveloperDraft),
}

impl EntityDraft {
    /// Returns the draft's raw id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Property(draft) => &draft.id,
            Self::Developer(draft) => &draft.id,
        }
    }
}

impl From<PropertyDraft> for EntityDraft {
    fn from(value: PropertyDraft) -> Self {
        Self::Property(value)
    }
}

impl From<DeveloperDraft> for EntityDraft {
    fn from(value: DeveloperDraft) -> Self {
        Self::Developer(value)
    }
}

/// A validated catalogue entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A property listing.
    Property(Property),
    /// A developer profile.
    Developer(Developer),
}

impl Entity {
    /// Validates a draft into an entity.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] raised by the variant's constructor.
    pub fn new(draft: EntityDraft) -> Result<Self, ValidationError> {
        match draft {
            EntityDraft::Property(property) => Property::new(property).map(Self::Property),
            EntityDraft::Developer(developer) => Developer::new(developer).map(Self::Developer),
        }
    }

    /// The entity discriminant.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Property(_) => EntityKind::Property,
            Self::Developer(_) => EntityKind::Developer,
        }
    }

    /// Catalogue-unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Property(property) => property.id(),
            Self::Developer(developer) => developer.id(),
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &LocalizedText {
        match self {
            Self::Property(property) => property.name(),
            Self::Developer(developer) => developer.name(),
        }
    }

    /// Location text.
    #[must_use]
    pub const fn location(&self) -> &LocalizedText {
        match self {
            Self::Property(property) => property.location(),
            Self::Developer(developer) => developer.location(),
        }
    }

    /// Representative image URI.
    #[must_use]
    pub fn image(&self) -> &str {
        match self {
            Self::Property(property) => property.image(),
            Self::Developer(developer) => developer.image(),
        }
    }

    /// Category labels in seed order.
    #[must_use]
    pub fn type_tags(&self) -> &[LocalizedText] {
        match self {
            Self::Property(property) => property.type_tags(),
            Self::Developer(developer) => developer.type_tags(),
        }
    }

    /// Whether the entity is highlighted.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        match self {
            Self::Property(property) => property.is_featured(),
            Self::Developer(developer) => developer.is_featured(),
        }
    }

    /// Borrow the property, if this entity is one.
    #[must_use]
    pub const fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(property) => Some(property),
            Self::Developer(_) => None,
        }
    }

    /// Borrow the developer, if this entity is one.
    #[must_use]
    pub const fn as_developer(&self) -> Option<&Developer> {
        match self {
            Self::Property(_) => None,
            Self::Developer(developer) => Some(developer),
        }
    }
}

/// Immutable, insertion-ordered collection of validated entities.
///
/// # Example
///
/// ```
/// use listing_directory::{Catalog, DeveloperDraft, EntityDraft, LocalizedTextDraft};
///
/// let draft = DeveloperDraft {
///     id: "1".to_owned(),
///     name: LocalizedTextDraft::new("بالم هيلز", "Palm Hills"),
///     location: LocalizedTextDraft::new("القاهرة", "Cairo"),
///     image: "https://example.test/palm.jpg".to_owned(),
///     type_tags: vec![LocalizedTextDraft::new("كمبوندات سكنية", "Residential Compounds")],
///     featured: true,
///     projects_count: 25,
/// };
///
/// let catalog = Catalog::new([EntityDraft::from(draft)]).expect("valid catalogue");
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("1").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates every draft and builds the catalogue.
    ///
    /// Construction is all-or-nothing: the first invalid draft aborts it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] for a blank id,
    /// [`ValidationError::DuplicateId`] when two drafts share an id, or the
    /// entity constructor's error for any other malformed field.
    pub fn new<I>(drafts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = EntityDraft>,
    {
        let mut entities = Vec::new();
        let mut index = HashMap::new();

        for (position, draft) in drafts.into_iter().enumerate() {
            if draft.id().trim().is_empty() {
                return Err(ValidationError::EmptyId { position });
            }
            let entity = Entity::new(draft)?;
            match index.entry(entity.id().to_owned()) {
                Entry::Occupied(occupied) => {
                    return Err(ValidationError::DuplicateId {
                        entity_id: occupied.key().clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(entities.len());
                }
            }
            entities.push(entity);
        }

        let catalog = Self { entities, index };
        info!(
            properties = catalog.properties().count(),
            developers = catalog.developers().count(),
            "listing catalogue built"
        );
        Ok(catalog)
    }

    /// All entities in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index
            .get(id)
            .and_then(|position| self.entities.get(*position))
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.entities.iter().filter_map(Entity::as_property)
    }

    /// Developers in insertion order.
    pub fn developers(&self) -> impl Iterator<Item = &Developer> {
        self.entities.iter().filter_map(Entity::as_developer)
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` when the catalogue holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Filters the catalogue; see [`filter`](crate::filter()).
    #[must_use]
    pub fn filter(&self, criteria: &Criteria) -> Vec<&Entity> {
        filter(&self.entities, criteria)
    }
}
