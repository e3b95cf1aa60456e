//! Single-line display labels built from extracted values.

use crate::extract::extract_values;

/// Separator used by [`label`].
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Join values into a one-line label.
///
/// Newlines inside a value are shown as a single space. Empty values are
/// kept, so they show up as adjacent separators.
pub fn format_label(values: &[String], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.replace('\n', " "))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Label for a key-property list, using [`DEFAULT_SEPARATOR`].
///
/// # Example
///
/// ```
/// use libkpl::label;
///
/// assert_eq!(label("type=Cat,name=\"Tom, the cat\""), "Cat, Tom, the cat");
/// ```
pub fn label(input: &str) -> String {
    format_label(&extract_values(input), DEFAULT_SEPARATOR)
}
