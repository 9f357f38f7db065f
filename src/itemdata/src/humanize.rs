//! Identifier humanization
//!
//! Journal ids are compact tokens such as `int_guardianfsdbooster_size5` or
//! `SRVBay`. [`humanize`] turns one into a display phrase when no table row
//! carries a proper name.

use convert_case::{Boundary, Converter};
use std::borrow::Cow;

fn word_splitter() -> Converter {
    Converter::new()
        .set_boundaries(&[
            Boundary::UNDERSCORE,
            Boundary::SPACE,
            Boundary::LOWER_UPPER,
            Boundary::ACRONYM,
            Boundary::DIGIT_UPPER,
            Boundary::UPPER_DIGIT,
            Boundary::DIGIT_LOWER,
            Boundary::LOWER_DIGIT,
        ])
        .set_delim(" ")
}

/// Turn a journal token into a space-separated, title-cased phrase.
///
/// Underscores and whitespace separate words. Inside a run a new word starts
/// between a lowercase and an uppercase letter, between letters and digits,
/// and before the last capital of an acronym that runs into a lowercase word.
/// Only the first character of each word is changed.
///
/// ```
/// assert_eq!(itemdata::humanize("nonexistent_widget_42"), "Nonexistent Widget 42");
/// assert_eq!(itemdata::humanize("SRVBay"), "SRV Bay");
/// ```
pub fn humanize(token: &str) -> String {
    word_splitter()
        .convert(token)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label used when reporting an id the tables do not know.
pub(crate) fn unknown_label<'a>(id: &str, fallback: Option<&'a str>) -> Cow<'a, str> {
    match fallback {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(humanize(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores_become_spaces() {
        assert_eq!(humanize("nonexistent_widget_42"), "Nonexistent Widget 42");
        assert_eq!(humanize("__double__underscore_"), "Double Underscore");
    }

    #[test]
    fn test_camel_case_split() {
        assert_eq!(humanize("WeaponCustomisation"), "Weapon Customisation");
        assert_eq!(humanize("hpt_EngineCustomisation_blue"), "Hpt Engine Customisation Blue");
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(humanize("SRVBay"), "SRV Bay");
        assert_eq!(humanize("int_SRV"), "Int SRV");
    }

    #[test]
    fn test_digits_split_from_letters() {
        assert_eq!(humanize("size5"), "Size 5");
        assert_eq!(humanize("class3fast"), "Class 3 Fast");
        assert_eq!(humanize("v2"), "V 2");
    }

    #[test]
    fn test_synthesized_module_names() {
        assert_eq!(humanize("WeaponCustomisation_teal"), "Weapon Customisation Teal");
        assert_eq!(humanize("SRV_modules_test"), "SRV Modules Test");
        assert_eq!(humanize("int_hyperdrive_overcharge_size5"), "Int Hyperdrive Overcharge Size 5");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("___"), "");
        assert_eq!(humanize("  spaced   out "), "Spaced Out");
    }

    #[test]
    fn test_unknown_label_prefers_fallback() {
        assert_eq!(unknown_label("odd_thing", Some("Odd")), "Odd");
        assert_eq!(unknown_label("odd_thing", None), "Odd Thing");
    }
}
