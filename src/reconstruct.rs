//! Normalized filename reconstruction.
//!
//! Given the shape a file name was classified as, pulls the issue year,
//! month and optional edition out of the name and assembles
//! `"<Series> YYYY-MM[ Edition].<ext>"`.
//!
//! Numeric month fields (the Spectrum V2 family and the concatenated digit
//! runs) are copied verbatim. Month names go through
//! [`month_to_number`](crate::lookup::month_to_number), so an unknown name
//! becomes `00` rather than an error.

use crate::error::{RenameError, RenameResult};
use crate::lookup::{edition_to_label, month_to_number};
use crate::shape::FilenameShape;
use tracing::debug;

/// Issue fields extracted from a vendor file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFields {
    pub year: String,
    pub month: String,
    pub edition: Option<&'static str>,
}

impl IssueFields {
    fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            edition: None,
        }
    }

    fn with_edition(mut self, edition: &'static str) -> Self {
        self.edition = Some(edition);
        self
    }

    /// Formats the normalized file name for `series`.
    ///
    /// The extension is lower-cased; a leading dot is optional.
    pub fn file_name(&self, series: &str, extension: &str) -> String {
        let mut name = format!("{} {}-{}", series, self.year, self.month);
        if let Some(edition) = self.edition {
            name.push(' ');
            name.push_str(edition);
        }
        let extension = extension.trim_start_matches('.');
        if !extension.is_empty() {
            name.push('.');
            name.push_str(&extension.to_lowercase());
        }
        name
    }
}

/// Builds the normalized file name for a classified file.
///
/// `base_name` is the file name without its final extension and `extension`
/// is that extension, with or without the leading dot.
///
/// # Errors
///
/// Returns [`RenameError::MalformedMatch`] when `shape` is `Unrecognized` or
/// the name lacks a field that its shape requires.
///
/// # Examples
///
/// ```
/// use magrename::reconstruct::reconstruct;
/// use magrename::shape::FilenameShape;
///
/// let name = reconstruct(FilenameShape::SpectrumV1, "Spectrum_12345_Mar_2020", "PDF").unwrap();
/// assert_eq!(name, "IEEE Spectrum 2020-03.pdf");
/// ```
pub fn reconstruct(shape: FilenameShape, base_name: &str, extension: &str) -> RenameResult<String> {
    let series = shape
        .series()
        .ok_or_else(|| malformed(shape, base_name, "no field rule for this shape"))?;
    let fields = extract_fields(shape, base_name)?;
    Ok(fields.file_name(series, extension))
}

/// Applies the field rule for `shape` to `base_name`.
pub fn extract_fields(shape: FilenameShape, base_name: &str) -> RenameResult<IssueFields> {
    let fields = FieldReader::new(shape, base_name);

    let issue = match shape {
        FilenameShape::SpectrumV1 => {
            let month = fields.part(2)?;
            let year = fields.part(3)?;
            debug!("Year is {}.", year);
            IssueFields::new(year, converted_month(month))
        }
        FilenameShape::SpectrumV2 => {
            let month = fields.part(0)?;
            let year = fields.part(2)?;
            debug!("Month is {}.", month);
            debug!("Year is {}.", year);
            IssueFields::new(year, month)
        }
        FilenameShape::SpectrumV2A => {
            let month = fields.part(0)?;
            let year = fields.part(2)?;
            let edition = fields.part(3)?;
            debug!("Month is {}.", month);
            debug!("Year is {}.", year);
            IssueFields::new(year, month).with_edition(converted_edition(edition))
        }
        FilenameShape::SpectrumV2B => {
            let month = fields.part(0)?;
            let (year, edition) = fields
                .part(2)?
                .split_once('.')
                .ok_or_else(|| fields.error("missing '.' between year and edition"))?;
            debug!("Month is {}.", month);
            debug!("Year is {}.", year);
            IssueFields::new(year, month).with_edition(converted_edition(edition))
        }
        FilenameShape::SpectrumV2C => {
            let month = fields.part(0)?;
            let year = fields.part(2)?;
            debug!("Month is {}.", month);
            debug!("Two-digit year is {}.", year);
            IssueFields::new(format!("20{}", year), month)
        }
        FilenameShape::InstituteV1 => {
            // Month name and year are run together: "march2019"
            let month_and_year = fields.part(2)?;
            let (month, year) = fields.split_from_end(month_and_year, 4)?;
            debug!("Year is {}.", year);
            IssueFields::new(year, converted_month(month))
        }
        FilenameShape::InstituteV1A => {
            let month = fields.part(2)?;
            let year = fields.part(3)?;
            debug!("Year is {}.", year);
            IssueFields::new(year, converted_month(month))
        }
        FilenameShape::InstituteV2 => {
            let month = fields.part(1)?;
            let year = fields.part(2)?;
            debug!("Year is {}.", year);
            IssueFields::new(year, converted_month(month))
        }
        FilenameShape::CompIntelV1 | FilenameShape::PotentialsV1 => {
            // YYYYMMDD digit run; the day is dropped
            let digits = fields.part(1)?;
            let (year, month_and_day) = fields.split_from_end(digits, 4)?;
            let (month, _) = fields.split_from_end(month_and_day, 2)?;
            debug!("Month is {}.", month);
            debug!("Year is {}.", year);
            IssueFields::new(year, month)
        }
        FilenameShape::CompIntelV2 => {
            let digits = fields.part(2)?;
            let (year, month) = fields.split_from_end(digits, 2)?;
            debug!("Month is {}.", month);
            debug!("Year is {}.", year);
            IssueFields::new(year, month)
        }
        FilenameShape::Unrecognized => {
            return Err(fields.error("no field rule for this shape"));
        }
    };

    Ok(issue)
}

fn converted_month(month: &str) -> &'static str {
    debug!("Month to convert is {}.", month);
    let number = month_to_number(month);
    debug!("New month identifier is '{}'.", number);
    number
}

fn converted_edition(edition: &str) -> &'static str {
    debug!("Edition to convert is {}.", edition);
    let label = edition_to_label(edition);
    debug!("New edition string is '{}'.", label);
    label
}

fn malformed(shape: FilenameShape, base_name: &str, reason: impl Into<String>) -> RenameError {
    RenameError::MalformedMatch {
        shape,
        file_name: base_name.to_string(),
        reason: reason.into(),
    }
}

/// Underscore-delimited view of a base name with checked access.
struct FieldReader<'a> {
    shape: FilenameShape,
    base_name: &'a str,
    parts: Vec<&'a str>,
}

impl<'a> FieldReader<'a> {
    fn new(shape: FilenameShape, base_name: &'a str) -> Self {
        Self {
            shape,
            base_name,
            parts: base_name.split('_').collect(),
        }
    }

    fn part(&self, index: usize) -> RenameResult<&'a str> {
        self.parts.get(index).copied().ok_or_else(|| {
            self.error(format!(
                "expected field {} but found only {} fields",
                index,
                self.parts.len()
            ))
        })
    }

    /// Splits `text` into everything before its last `count` bytes and those bytes.
    fn split_from_end(&self, text: &'a str, count: usize) -> RenameResult<(&'a str, &'a str)> {
        let boundary = text
            .len()
            .checked_sub(count)
            .filter(|index| text.is_char_boundary(*index))
            .ok_or_else(|| {
                self.error(format!(
                    "'{}' is too short to take the last {} characters",
                    text, count
                ))
            })?;
        Ok(text.split_at(boundary))
    }

    fn error(&self, reason: impl Into<String>) -> RenameError {
        malformed(self.shape, self.base_name, reason)
    }
}
