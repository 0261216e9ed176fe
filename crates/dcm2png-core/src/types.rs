//! Core data types shared across the conversion pipeline.

use std::fmt;
use std::path::PathBuf;

use crate::error::ConvertOutcome;

/// Anatomical side an image pertains to, as carried by the
/// ImageLaterality tag.
///
/// Anything other than exactly `L` or `R` collapses to [`Laterality::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Laterality {
    /// Left side (`L`)
    Left,
    /// Right side (`R`)
    Right,
    /// Absent, empty, or invalid value (`?`)
    #[default]
    Unknown,
}

impl Laterality {
    /// Parse a raw tag value, coercing anything that is not exactly
    /// `"L"` or `"R"` (after trimming DICOM padding) to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("L") => Laterality::Left,
            Some("R") => Laterality::Right,
            _ => Laterality::Unknown,
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Laterality::Left => write!(f, "L"),
            Laterality::Right => write!(f, "R"),
            Laterality::Unknown => write!(f, "?"),
        }
    }
}

/// The metadata fields used to name an output file.
///
/// Extraction is total: every field has a defined default when the tag is
/// absent, so any decoded dataset yields a usable `ImageMeta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    /// PatientID, or empty when absent
    pub patient_id: String,
    /// StudyDate, or empty when absent
    pub study_date: String,
    /// StudyTime, or empty when absent
    pub study_time: String,
    /// InstanceNumber, or `-1` when absent
    pub instance_number: i32,
    /// ImageLaterality, validated to `{L, R, ?}`
    pub laterality: Laterality,
}

impl Default for ImageMeta {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            study_date: String::new(),
            study_time: String::new(),
            instance_number: -1,
            laterality: Laterality::Unknown,
        }
    }
}

/// The outcome of converting one source file.
///
/// Exactly one of these exists per discovered file, and the batch result
/// sequence preserves discovery order regardless of completion order.
#[derive(Debug)]
pub struct ConversionResult {
    /// The source file this result belongs to
    pub input: PathBuf,
    /// Output path on success, conversion error on failure
    pub outcome: ConvertOutcome,
}

impl ConversionResult {
    /// Whether the conversion produced an output file.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
