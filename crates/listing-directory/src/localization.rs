//! Bilingual text primitives shared by catalogue entities and display records.
//!
//! Seed data carries every user-visible string as an Arabic/English pair.
//! The domain represents a pair as a fixed-shape [`LocalizedText`] so a
//! missing language is caught when the catalogue is built, never while
//! rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the two languages the directory renders.
///
/// Arabic is the primary language: it is the site default and the fallback
/// for any tag that is not recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Arabic, rendered right-to-left.
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    /// English, rendered left-to-right.
    #[serde(rename = "en")]
    English,
}

/// Layout direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Right-to-left.
    Rtl,
    /// Left-to-right.
    Ltr,
}

impl Language {
    /// Both supported languages, primary first.
    pub const ALL: [Self; 2] = [Self::Arabic, Self::English];

    /// Parses a language tag, falling back to Arabic for unknown tags.
    ///
    /// Matching is on the primary subtag and ignores case, so `en`, `EN`,
    /// and `en-US` all select English.
    ///
    /// # Examples
    ///
    /// ```
    /// use listing_directory::Language;
    ///
    /// assert_eq!(Language::from_tag("en-GB"), Language::English);
    /// assert_eq!(Language::from_tag("ar-EG"), Language::Arabic);
    /// assert_eq!(Language::from_tag("fr"), Language::Arabic);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Self::English
        } else {
            Self::Arabic
        }
    }

    /// Returns the two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Returns the locale whose numeral conventions prices follow.
    #[must_use]
    pub const fn number_locale(self) -> &'static str {
        match self {
            Self::Arabic => "ar-EG",
            Self::English => "en-US",
        }
    }

    /// Returns the language's name written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Arabic => "العربية",
            Self::English => "English",
        }
    }

    /// Returns the layout direction for the language.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Arabic => TextDirection::Rtl,
            Self::English => TextDirection::Ltr,
        }
    }

    /// Picks between an Arabic and an English literal.
    #[must_use]
    pub const fn pick<'a>(self, arabic: &'a str, english: &'a str) -> &'a str {
        match self {
            Self::Arabic => arabic,
            Self::English => english,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw localized pair as it appears in seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedTextDraft {
    /// Arabic text.
    pub ar: String,
    /// English text.
    pub en: String,
}

impl LocalizedTextDraft {
    /// Create a draft pair.
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }
}

/// A validated Arabic/English pair; both sides are non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    ar: String,
    en: String,
}

impl LocalizedText {
    /// Validates a draft pair for the given entity and field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTranslation`] naming the blank side.
    pub fn new(
        draft: LocalizedTextDraft,
        entity_id: &str,
        field: &str,
    ) -> Result<Self, ValidationError> {
        for (language, text) in [(Language::Arabic, &draft.ar), (Language::English, &draft.en)] {
            if text.trim().is_empty() {
                return Err(ValidationError::MissingTranslation {
                    entity_id: entity_id.to_owned(),
                    field: field.to_owned(),
                    language: language.code(),
                });
            }
        }
        Ok(Self {
            ar: draft.ar,
            en: draft.en,
        })
    }

    /// Returns the text for `language`.
    #[must_use]
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.ar,
            Language::English => &self.en,
        }
    }

    /// Returns `true` when either side contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        Language::ALL
            .into_iter()
            .any(|language| self.resolve(language).to_lowercase().contains(needle))
    }
}

/// Resolves `pair` for a raw language tag.
///
/// Unknown tags resolve to the Arabic side.
///
/// # Examples
///
/// ```
/// use listing_directory::{LocalizedText, LocalizedTextDraft, resolve};
///
/// let pair = LocalizedText::new(
///     LocalizedTextDraft::new("الشيخ زايد", "Sheikh Zayed"),
///     "2",
///     "location",
/// )
/// .expect("valid pair");
///
/// assert_eq!(resolve(&pair, "en"), "Sheikh Zayed");
/// assert_eq!(resolve(&pair, "de"), "الشيخ زايد");
/// ```
#[must_use]
pub fn resolve<'a>(pair: &'a LocalizedText, language_tag: &str) -> &'a str {
    pair.resolve(Language::from_tag(language_tag))
}
