//! Raw search form input and its normalisation into [`Criteria`].

use serde::{Deserialize, Serialize};

use super::{BedroomCount, Criteria, SortOrder};
use crate::catalog::ListingType;

/// String fields exactly as the search form submits them.
///
/// Every field defaults to the empty string, which means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchForm {
    /// City or area text.
    pub location: String,
    /// Property type text, for example `apartment`.
    pub property_type: String,
    /// `sale`, `rent`, or empty.
    pub listing_type: String,
    /// Minimum price as typed.
    pub min_price: String,
    /// Maximum price as typed.
    pub max_price: String,
    /// Bedroom count or `5+`.
    pub bedrooms: String,
    /// Developer id.
    pub developer: String,
    /// Free-text name or location search.
    pub query: String,
    /// `newest`, `price-low`, or `price-high`.
    pub sort: String,
}

impl Criteria {
    /// Normalises raw form input.
    ///
    /// Values that are blank or cannot be parsed become "no constraint"
    /// instead of rejecting the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use listing_directory::{BedroomCount, Criteria, ListingType, SearchForm};
    ///
    /// let form = SearchForm {
    ///     listing_type: "Sale".to_owned(),
    ///     min_price: "1000000".to_owned(),
    ///     max_price: "not a number".to_owned(),
    ///     bedrooms: "5+".to_owned(),
    ///     ..SearchForm::default()
    /// };
    /// let criteria = Criteria::from_form(&form);
    ///
    /// assert_eq!(criteria.listing_type, Some(ListingType::Sale));
    /// assert_eq!(criteria.min_price, Some(1_000_000));
    /// assert_eq!(criteria.max_price, None);
    /// assert_eq!(criteria.bedrooms, Some(BedroomCount::FiveOrMore));
    /// ```
    #[must_use]
    pub fn from_form(form: &SearchForm) -> Self {
        Self {
            location: non_blank(&form.location),
            property_type: non_blank(&form.property_type),
            listing_type: parse_listing_type(&form.listing_type),
            min_price: parse_price(&form.min_price),
            max_price: parse_price(&form.max_price),
            bedrooms: BedroomCount::parse(&form.bedrooms),
            developer_id: non_blank(&form.developer),
            query: non_blank(&form.query),
            sort: SortOrder::parse(&form.sort),
        }
    }
}

impl From<&SearchForm> for Criteria {
    fn from(value: &SearchForm) -> Self {
        Self::from_form(value)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_listing_type(value: &str) -> Option<ListingType> {
    match value.trim().to_ascii_lowercase().as_str() {
        "sale" => Some(ListingType::Sale),
        "rent" => Some(ListingType::Rent),
        _ => None,
    }
}

fn parse_price(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    //! Unit tests for search form normalisation.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn empty_form_yields_unconstrained_criteria() {
        let criteria = Criteria::from_form(&SearchForm::default());
        assert_eq!(criteria, Criteria::default());
        assert!(criteria.is_unconstrained());
    }

    #[rstest]
    #[case("sale", Some(ListingType::Sale))]
    #[case("RENT", Some(ListingType::Rent))]
    #[case(" rent ", Some(ListingType::Rent))]
    #[case("", None)]
    #[case("lease", None)]
    fn listing_type_is_parsed(#[case] raw: &str, #[case] expected: Option<ListingType>) {
        let form = SearchForm {
            listing_type: raw.to_owned(),
            ..SearchForm::default()
        };
        assert_eq!(Criteria::from_form(&form).listing_type, expected);
    }

    #[rstest]
    #[case("2500000", Some(2_500_000))]
    #[case(" 0 ", Some(0))]
    #[case("-5", None)]
    #[case("1.5", None)]
    #[case("", None)]
    fn prices_are_parsed(#[case] raw: &str, #[case] expected: Option<u64>) {
        let form = SearchForm {
            min_price: raw.to_owned(),
            ..SearchForm::default()
        };
        assert_eq!(Criteria::from_form(&form).min_price, expected);
    }

    #[rstest]
    #[case("3", Some(BedroomCount::Exactly(3)))]
    #[case("5+", Some(BedroomCount::FiveOrMore))]
    #[case("five", None)]
    #[case("", None)]
    fn bedrooms_are_parsed(#[case] raw: &str, #[case] expected: Option<BedroomCount>) {
        let form = SearchForm {
            bedrooms: raw.to_owned(),
            ..SearchForm::default()
        };
        assert_eq!(Criteria::from_form(&form).bedrooms, expected);
    }

    #[rstest]
    fn blank_text_fields_are_dropped() {
        let form = SearchForm {
            location: "   ".to_owned(),
            property_type: String::new(),
            developer: " palm-hills ".to_owned(),
            query: "Zayed".to_owned(),
            sort: "price-high".to_owned(),
            ..SearchForm::default()
        };
        let criteria = Criteria::from(&form);

        assert_eq!(criteria.location, None);
        assert_eq!(criteria.property_type, None);
        assert_eq!(criteria.developer_id.as_deref(), Some("palm-hills"));
        assert_eq!(criteria.query.as_deref(), Some("Zayed"));
        assert_eq!(criteria.sort, Some(SortOrder::PriceHighToLow));
    }
}
