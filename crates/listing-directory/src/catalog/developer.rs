//! Developer (compound builder) entity.

use serde::{Deserialize, Serialize};

use super::EntityKind;
use super::listing::{Listing, ListingParts};
use super::validation::non_negative_count;
use crate::error::ValidationError;
use crate::localization::{LocalizedText, LocalizedTextDraft};

/// Input payload for [`Developer::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DeveloperDraft {
    /// Catalogue-unique id.
    pub id: String,
    /// Company name.
    pub name: LocalizedTextDraft,
    /// Regions the developer builds in.
    pub location: LocalizedTextDraft,
    /// Representative image URI.
    pub image: String,
    /// Project categories, for example "Residential Compounds".
    pub type_tags: Vec<LocalizedTextDraft>,
    /// Display emphasis flag.
    #[serde(default)]
    pub featured: bool,
    /// Number of delivered or ongoing projects.
    pub projects_count: i32,
}

/// A validated developer profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    listing: Listing,
    projects_count: u32,
}

impl Developer {
    /// Validate and construct a developer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a text field or translation is
    /// blank, the tag list is empty, or the project count is negative.
    pub fn new(draft: DeveloperDraft) -> Result<Self, ValidationError> {
        Self::try_from(draft)
    }

    /// Catalogue-unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.listing.id
    }

    /// Company name.
    #[must_use]
    pub const fn name(&self) -> &LocalizedText {
        &self.listing.name
    }

    /// Regions the developer builds in.
    #[must_use]
    pub const fn location(&self) -> &LocalizedText {
        &self.listing.location
    }

    /// Representative image URI.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.listing.image
    }

    /// Project categories in seed order.
    #[must_use]
    pub fn type_tags(&self) -> &[LocalizedText] {
        &self.listing.type_tags
    }

    /// Whether the developer is highlighted.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.listing.featured
    }

    /// Number of projects.
    #[must_use]
    pub const fn projects_count(&self) -> u32 {
        self.projects_count
    }
}

impl TryFrom<DeveloperDraft> for Developer {
    type Error = ValidationError;

    fn try_from(draft: DeveloperDraft) -> Result<Self, Self::Error> {
        let listing = Listing::new(
            ListingParts {
                id: draft.id,
                name: draft.name,
                location: draft.location,
                image: draft.image,
                type_tags: draft.type_tags,
                featured: draft.featured,
            },
            EntityKind::Developer,
        )?;
        let projects_count = non_negative_count(
            draft.projects_count,
            &listing.id,
            "developer.projectsCount",
        )?;

        Ok(Self {
            listing,
            projects_count,
        })
    }
}
