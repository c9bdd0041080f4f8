//! Filename shape classification.
//!
//! Each magazine series and era uses its own vendor naming convention. This
//! module recognizes those conventions ("shapes") from a bare file name so
//! the reconstructor knows which fields to pull out of it.
//!
//! # Examples
//!
//! ```
//! use magrename::shape::{FilenameShape, classify};
//!
//! assert_eq!(classify("Spectrum_12345_Mar_2020.PDF"), FilenameShape::SpectrumV1);
//! assert_eq!(classify("07_Spectrum_2021_NA.pdf"), FilenameShape::SpectrumV2A);
//! assert_eq!(classify("randomfile.txt"), FilenameShape::Unrecognized);
//! ```
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// A recognized vendor filename convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilenameShape {
    /// `Spectrum_12345_Mar_2020.PDF`
    SpectrumV1,
    /// `07_Spectrum_2021.pdf`
    SpectrumV2,
    /// `07_Spectrum_2021_NA.pdf`
    SpectrumV2A,
    /// `07_Spectrum_2021.NA.pdf`
    SpectrumV2B,
    /// `07_Spectrum_21.pdf`
    SpectrumV2C,
    /// `ieee_institute_march2019.pdf`
    InstituteV1,
    /// `ieee_institute_march_2019.pdf`
    InstituteV1A,
    /// `TheInstitute_Mar_2019.pdf`
    InstituteV2,
    /// `CIG_20200312_Mar_2020.PDF`
    CompIntelV1,
    /// `ieee_computationalintelligence_202103.pdf`
    CompIntelV2,
    /// `POT_20200312_Mar_2020.PDF`
    PotentialsV1,
    /// Anything that matches none of the shapes above.
    Unrecognized,
}

impl FilenameShape {
    /// Recognized shapes in the order they are tested.
    ///
    /// The Spectrum V2 family and the Institute family are structurally
    /// close; the first pattern that matches decides.
    pub const PRIORITY: [FilenameShape; 11] = [
        FilenameShape::SpectrumV1,
        FilenameShape::SpectrumV2,
        FilenameShape::SpectrumV2A,
        FilenameShape::SpectrumV2B,
        FilenameShape::SpectrumV2C,
        FilenameShape::InstituteV1,
        FilenameShape::InstituteV1A,
        FilenameShape::InstituteV2,
        FilenameShape::CompIntelV1,
        FilenameShape::CompIntelV2,
        FilenameShape::PotentialsV1,
    ];

    /// Returns the anchored regular expression for this shape.
    ///
    /// `Unrecognized` has no pattern.
    pub fn pattern(&self) -> Option<&'static str> {
        let pattern = match self {
            FilenameShape::SpectrumV1 => r"^Spectrum_[0-9]{5}_[A-Z][a-z]{2}_[0-9]{4}\.PDF$",
            FilenameShape::SpectrumV2 => r"^[0-9]{2}_Spectrum_[0-9]{4}\.pdf$",
            FilenameShape::SpectrumV2A => r"^[0-9]{2}_Spectrum_[0-9]{4}_[A-Z]{2,3}\.pdf$",
            FilenameShape::SpectrumV2B => r"^[0-9]{2}_Spectrum_[0-9]{4}\.[A-Z]{2,3}\.pdf$",
            FilenameShape::SpectrumV2C => r"^[0-9]{2}_Spectrum_[0-9]{2}\.pdf$",
            FilenameShape::InstituteV1 => r"^ieee_institute_[a-z]*[0-9]{4}\.pdf$",
            FilenameShape::InstituteV1A => r"^ieee_institute_[a-z]*_[0-9]{4}\.pdf$",
            FilenameShape::InstituteV2 => r"^TheInstitute_[A-Z][a-z]{2}_[0-9]{4}\.pdf$",
            FilenameShape::CompIntelV1 => r"^CIG_[0-9]{8}_[A-Z][a-z]{2}_[0-9]{4}\.PDF$",
            FilenameShape::CompIntelV2 => r"^ieee_computationalintelligence_[0-9]{6}\.pdf$",
            FilenameShape::PotentialsV1 => r"^POT_[0-9]{8}_[A-Z][a-z]{2}_[0-9]{4}\.PDF$",
            FilenameShape::Unrecognized => return None,
        };
        Some(pattern)
    }

    /// Returns the magazine title used as the prefix of normalized names.
    pub fn series(&self) -> Option<&'static str> {
        match self {
            FilenameShape::SpectrumV1
            | FilenameShape::SpectrumV2
            | FilenameShape::SpectrumV2A
            | FilenameShape::SpectrumV2B
            | FilenameShape::SpectrumV2C => Some("IEEE Spectrum"),
            FilenameShape::InstituteV1
            | FilenameShape::InstituteV1A
            | FilenameShape::InstituteV2 => Some("IEEE The Institute"),
            FilenameShape::CompIntelV1 | FilenameShape::CompIntelV2 => {
                Some("IEEE Computational Intelligence Magazine")
            }
            FilenameShape::PotentialsV1 => Some("IEEE Potentials"),
            FilenameShape::Unrecognized => None,
        }
    }

    /// Returns the format revision label, e.g. "V2A".
    pub fn format_label(&self) -> &'static str {
        match self {
            FilenameShape::SpectrumV1
            | FilenameShape::InstituteV1
            | FilenameShape::CompIntelV1
            | FilenameShape::PotentialsV1 => "V1",
            FilenameShape::SpectrumV2
            | FilenameShape::InstituteV2
            | FilenameShape::CompIntelV2 => "V2",
            FilenameShape::SpectrumV2A => "V2A",
            FilenameShape::SpectrumV2B => "V2B",
            FilenameShape::SpectrumV2C => "V2C",
            FilenameShape::InstituteV1A => "V1A",
            FilenameShape::Unrecognized => "unknown",
        }
    }

    /// Returns a human-readable description for log lines.
    pub fn description(&self) -> String {
        match self.series() {
            Some(series) => format!("{} file, {} format", series, self.format_label()),
            None => "unknown file".to_string(),
        }
    }

    /// Returns true for every shape except `Unrecognized`.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, FilenameShape::Unrecognized)
    }
}

impl fmt::Display for FilenameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Ordered set of compiled shape patterns.
///
/// Build it once per run and reuse it for every file; compiling the patterns
/// is the only non-trivial cost of classification.
#[derive(Debug, Clone)]
pub struct ShapeClassifier {
    patterns: Vec<(FilenameShape, Regex)>,
}

impl ShapeClassifier {
    /// Compiles the built-in patterns in priority order.
    pub fn new() -> Self {
        let patterns = FilenameShape::PRIORITY
            .iter()
            .filter_map(|shape| shape.pattern().map(|pattern| (*shape, pattern)))
            .map(|(shape, pattern)| {
                let regex = Regex::new(pattern).expect("Invalid built-in shape pattern");
                (shape, regex)
            })
            .collect();
        Self { patterns }
    }

    /// Returns the first shape whose pattern matches `file_name`.
    ///
    /// `file_name` is a bare name with its extension and no directory part.
    pub fn classify(&self, file_name: &str) -> FilenameShape {
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(file_name))
            .map(|(shape, _)| *shape)
            .unwrap_or(FilenameShape::Unrecognized)
    }

    /// Returns every shape whose pattern matches `file_name`, in priority order.
    ///
    /// A well-formed pattern set yields at most one entry for any input.
    pub fn matching_shapes(&self, file_name: &str) -> Vec<FilenameShape> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(file_name))
            .map(|(shape, _)| *shape)
            .collect()
    }
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

static CLASSIFIER: LazyLock<ShapeClassifier> = LazyLock::new(ShapeClassifier::new);

/// Classifies a bare file name using a shared, lazily compiled classifier.
pub fn classify(file_name: &str) -> FilenameShape {
    CLASSIFIER.classify(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One representative name per recognized shape.
    const SAMPLES: [(&str, FilenameShape); 11] = [
        ("Spectrum_12345_Mar_2020.PDF", FilenameShape::SpectrumV1),
        ("07_Spectrum_2021.pdf", FilenameShape::SpectrumV2),
        ("07_Spectrum_2021_NA.pdf", FilenameShape::SpectrumV2A),
        ("07_Spectrum_2021.INT.pdf", FilenameShape::SpectrumV2B),
        ("07_Spectrum_21.pdf", FilenameShape::SpectrumV2C),
        ("ieee_institute_march2019.pdf", FilenameShape::InstituteV1),
        ("ieee_institute_march_2019.pdf", FilenameShape::InstituteV1A),
        ("TheInstitute_Mar_2019.pdf", FilenameShape::InstituteV2),
        ("CIG_20200312_Mar_2020.PDF", FilenameShape::CompIntelV1),
        ("ieee_computationalintelligence_202103.pdf", FilenameShape::CompIntelV2),
        ("POT_20200312_Mar_2020.PDF", FilenameShape::PotentialsV1),
    ];

    #[test]
    fn test_every_sample_classifies_to_its_shape() {
        let classifier = ShapeClassifier::new();
        for (name, shape) in SAMPLES {
            assert_eq!(classifier.classify(name), shape, "sample {}", name);
        }
    }

    #[test]
    fn test_patterns_do_not_overlap() {
        let classifier = ShapeClassifier::new();
        for (name, shape) in SAMPLES {
            assert_eq!(
                classifier.matching_shapes(name),
                vec![shape],
                "sample {} matched more than one pattern",
                name
            );
        }
    }

    #[test]
    fn test_priority_covers_all_recognized_shapes() {
        assert_eq!(FilenameShape::PRIORITY.len(), SAMPLES.len());
        for (index, (_, shape)) in SAMPLES.iter().enumerate() {
            assert_eq!(FilenameShape::PRIORITY[index], *shape);
        }
        assert!(FilenameShape::Unrecognized.pattern().is_none());
    }

    #[test]
    fn test_unrecognized_names() {
        assert_eq!(classify("randomfile.txt"), FilenameShape::Unrecognized);
        assert_eq!(classify(""), FilenameShape::Unrecognized);
        assert_eq!(classify("IEEE Spectrum 2020-03.pdf"), FilenameShape::Unrecognized);
    }

    #[test]
    fn test_extension_case_is_part_of_the_shape() {
        assert_eq!(classify("Spectrum_12345_Mar_2020.pdf"), FilenameShape::Unrecognized);
        assert_eq!(classify("07_Spectrum_2021.PDF"), FilenameShape::Unrecognized);
    }

    #[test]
    fn test_trailing_suffix_is_rejected() {
        assert_eq!(classify("07_Spectrum_2021.pdf.bak"), FilenameShape::Unrecognized);
        assert_eq!(classify("Spectrum_12345_Mar_2020.PDFx"), FilenameShape::Unrecognized);
        assert_eq!(classify("x07_Spectrum_2021.pdf"), FilenameShape::Unrecognized);
    }

    #[test]
    fn test_region_code_length() {
        assert_eq!(classify("07_Spectrum_2021_N.pdf"), FilenameShape::Unrecognized);
        assert_eq!(classify("07_Spectrum_2021_INTL.pdf"), FilenameShape::Unrecognized);
        assert_eq!(classify("07_Spectrum_2021_na.pdf"), FilenameShape::Unrecognized);
        assert_eq!(classify("07_Spectrum_2021_INT.pdf"), FilenameShape::SpectrumV2A);
    }

    #[test]
    fn test_institute_v1_accepts_empty_month_run() {
        assert_eq!(classify("ieee_institute_2019.pdf"), FilenameShape::InstituteV1);
        assert_eq!(classify("ieee_institute__2019.pdf"), FilenameShape::InstituteV1A);
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic digits would break fixed-offset slicing downstream
        assert_eq!(classify("٠٧_Spectrum_2021.pdf"), FilenameShape::Unrecognized);
    }

    #[test]
    fn test_series_and_description() {
        assert_eq!(FilenameShape::SpectrumV2B.series(), Some("IEEE Spectrum"));
        assert_eq!(
            FilenameShape::CompIntelV2.series(),
            Some("IEEE Computational Intelligence Magazine")
        );
        assert_eq!(FilenameShape::Unrecognized.series(), None);
        assert_eq!(
            FilenameShape::SpectrumV2A.description(),
            "IEEE Spectrum file, V2A format"
        );
        assert!(!FilenameShape::Unrecognized.is_recognized());
        assert!(FilenameShape::PotentialsV1.is_recognized());
    }
}
