//! Locale-aware numeral rendering.
//!
//! English output uses ASCII digits grouped with `,`. Arabic output follows
//! the `ar-EG` convention: Arabic-Indic digits grouped with `٬` (U+066C) and
//! `٫` (U+066B) as the decimal separator.

use crate::localization::Language;

const GROUP_SIZE: usize = 3;

/// Formats an integer with thousands grouping in the language's numerals.
///
/// # Examples
///
/// ```
/// use listing_directory::{Language, format_number};
///
/// assert_eq!(format_number(3_500_000, Language::English), "3,500,000");
/// assert_eq!(format_number(3_500_000, Language::Arabic), "٣٬٥٠٠٬٠٠٠");
/// assert_eq!(format_number(950, Language::English), "950");
/// ```
#[must_use]
pub fn format_number(value: u64, language: Language) -> String {
    group_digits(&value.to_string(), language)
}

/// Formats a count with the same conventions as [`format_number`].
pub(super) fn format_count(value: usize, language: Language) -> String {
    group_digits(&value.to_string(), language)
}

/// Renders a floor area without grouping, localising digits and the decimal
/// separator.
pub(super) fn format_area(value: f64, language: Language) -> String {
    value
        .to_string()
        .chars()
        .map(|symbol| localize_symbol(symbol, language))
        .collect()
}

fn group_digits(digits: &str, language: Language) -> String {
    let separator = match language {
        Language::Arabic => '\u{066C}',
        Language::English => ',',
    };
    let reversed: Vec<char> = digits
        .chars()
        .rev()
        .map(|symbol| localize_symbol(symbol, language))
        .collect();
    let groups: Vec<String> = reversed
        .chunks(GROUP_SIZE)
        .rev()
        .map(|chunk| chunk.iter().rev().collect())
        .collect();
    groups.join(&separator.to_string())
}

const fn localize_symbol(symbol: char, language: Language) -> char {
    match language {
        Language::English => symbol,
        Language::Arabic => arabic_indic(symbol),
    }
}

const fn arabic_indic(symbol: char) -> char {
    match symbol {
        '0' => '٠',
        '1' => '١',
        '2' => '٢',
        '3' => '٣',
        '4' => '٤',
        '5' => '٥',
        '6' => '٦',
        '7' => '٧',
        '8' => '٨',
        '9' => '٩',
        '.' => '\u{066B}',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(7, "7")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(45_000, "45,000")]
    #[case(1_200_000, "1,200,000")]
    #[case(15_900_000, "15,900,000")]
    fn english_numbers_use_comma_groups(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_number(value, Language::English), expected);
    }

    #[rstest]
    #[case(45_000, "٤٥٬٠٠٠")]
    #[case(8_500_000, "٨٬٥٠٠٬٠٠٠")]
    #[case(12, "١٢")]
    fn arabic_numbers_use_arabic_indic_digits(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_number(value, Language::Arabic), expected);
    }

    #[rstest]
    #[case(150.0, Language::English, "150")]
    #[case(45.5, Language::English, "45.5")]
    #[case(150.0, Language::Arabic, "١٥٠")]
    #[case(45.5, Language::Arabic, "٤٥٫٥")]
    fn areas_localise_digits_and_decimal_point(
        #[case] value: f64,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        assert_eq!(format_area(value, language), expected);
    }

    #[test]
    fn counts_share_number_grouping() {
        assert_eq!(format_count(1_234, Language::English), "1,234");
    }
}
