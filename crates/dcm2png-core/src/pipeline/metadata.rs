//! Naming-field extraction from decoded DICOM datasets.

use dicom_dictionary_std::tags;
use dicom_object::{InMemDicomObject, Tag};

use crate::types::{ImageMeta, Laterality};

/// Extracts the output-naming fields from decoded datasets.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract the five naming fields from a dataset.
    ///
    /// Total over any decoded dataset: absent or unreadable fields fall
    /// back to their defaults instead of failing.
    pub fn extract(obj: &InMemDicomObject) -> ImageMeta {
        ImageMeta {
            patient_id: Self::string_value(obj, tags::PATIENT_ID).unwrap_or_default(),
            study_date: Self::string_value(obj, tags::STUDY_DATE).unwrap_or_default(),
            study_time: Self::string_value(obj, tags::STUDY_TIME).unwrap_or_default(),
            instance_number: Self::int_value(obj, tags::INSTANCE_NUMBER).unwrap_or(-1),
            laterality: Laterality::parse(
                Self::string_value(obj, tags::IMAGE_LATERALITY).as_deref(),
            ),
        }
    }

    /// Get a trimmed string field, if present and readable.
    fn string_value(obj: &InMemDicomObject, tag: Tag) -> Option<String> {
        obj.element(tag)
            .ok()
            .and_then(|e| e.to_str().ok())
            .map(|s| s.trim().to_string())
    }

    /// Get an integer field, if present and convertible.
    fn int_value(obj: &InMemDicomObject, tag: Tag) -> Option<i32> {
        obj.element(tag).ok().and_then(|e| e.to_int::<i32>().ok())
    }
}
