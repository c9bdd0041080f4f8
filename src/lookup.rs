//! Month and edition lookup tables.
//!
//! Vendor filenames spell months and regional editions in several ways
//! ("Mar", "march", "NA", "INT"). These helpers fold them into the values
//! used in normalized names.
//!
//! # Examples
//!
//! ```
//! use magrename::lookup::{edition_to_label, month_to_number};
//!
//! assert_eq!(month_to_number("Mar"), "03");
//! assert_eq!(month_to_number("september"), "09");
//! assert_eq!(edition_to_label("NA"), "North America");
//! ```

/// Month number returned for any month name that is not recognized.
pub const UNKNOWN_MONTH: &str = "00";

/// Edition label returned for any edition code that is not recognized.
pub const UNKNOWN_EDITION: &str = "Other";

/// Lower-case month names and abbreviations mapped to two-digit numbers.
const MONTHS: [(&str, &str); 23] = [
    ("jan", "01"),
    ("january", "01"),
    ("feb", "02"),
    ("february", "02"),
    ("mar", "03"),
    ("march", "03"),
    ("apr", "04"),
    ("april", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("june", "06"),
    ("jul", "07"),
    ("july", "07"),
    ("aug", "08"),
    ("august", "08"),
    ("sep", "09"),
    ("september", "09"),
    ("oct", "10"),
    ("october", "10"),
    ("nov", "11"),
    ("november", "11"),
    ("dec", "12"),
    ("december", "12"),
];

/// Lower-case edition codes mapped to the label used in output names.
const EDITIONS: [(&str, &str); 2] = [("int", "International"), ("na", "North America")];

/// Converts a month abbreviation or full month name to its two-digit number.
///
/// Matching is case-insensitive. Anything else, including the empty string,
/// yields [`UNKNOWN_MONTH`].
///
/// # Examples
///
/// ```
/// use magrename::lookup::month_to_number;
///
/// assert_eq!(month_to_number("JAN"), "01");
/// assert_eq!(month_to_number("December"), "12");
/// assert_eq!(month_to_number("xyz"), "00");
/// ```
pub fn month_to_number(text: &str) -> &'static str {
    let folded = text.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == folded)
        .map(|(_, number)| *number)
        .unwrap_or(UNKNOWN_MONTH)
}

/// Converts a short edition code to a human-readable label.
///
/// Unknown codes yield [`UNKNOWN_EDITION`] rather than an empty or missing
/// value, so the output name always has a readable edition suffix.
///
/// # Examples
///
/// ```
/// use magrename::lookup::edition_to_label;
///
/// assert_eq!(edition_to_label("int"), "International");
/// assert_eq!(edition_to_label("EU"), "Other");
/// ```
pub fn edition_to_label(code: &str) -> &'static str {
    let folded = code.to_lowercase();
    EDITIONS
        .iter()
        .find(|(key, _)| *key == folded)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_EDITION)
}
