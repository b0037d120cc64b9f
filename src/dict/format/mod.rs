//! Element tree to model transformations for the two dictionary grammars.

pub mod jmdict;
pub mod kanjidic;
pub mod schema;
pub mod xref;

use crate::dict::xml::Element;

/// Collapses an empty list to `None`.
pub(crate) fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Reads the language attribute of an element.
///
/// `xml:lang` wins over a bare `lang`; without either, `default` is used.
pub(crate) fn language_of(element: &Element, default: &str) -> String {
    element
        .attribute("xml:lang")
        .or_else(|| element.attribute("lang"))
        .unwrap_or(default)
        .to_string()
}
