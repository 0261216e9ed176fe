//! Helpers for writing small synthetic DICOM files in tests.

use std::path::Path;

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::meta::FileMetaTableBuilder;
use dicom_object::InMemDicomObject;

/// Parameters for a synthetic test dataset.
pub(crate) struct TestDicom {
    pub patient_id: Option<&'static str>,
    pub study_date: Option<&'static str>,
    pub study_time: Option<&'static str>,
    pub instance_number: Option<i32>,
    pub laterality: Option<&'static str>,
    pub with_pixels: bool,
    pub rgb: bool,
}

impl Default for TestDicom {
    fn default() -> Self {
        Self {
            patient_id: Some("P1"),
            study_date: None,
            study_time: None,
            instance_number: Some(1),
            laterality: None,
            with_pixels: true,
            rgb: false,
        }
    }
}

/// Write a minimal uncompressed (Explicit VR Little Endian) DICOM file.
///
/// The pixel payload is a 4x4 image, 8 bits per sample, monochrome by
/// default or RGB when `rgb` is set.
pub(crate) fn write_test_dicom(path: &Path, params: &TestDicom) {
    let mut obj = InMemDicomObject::new_empty();

    obj.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
    ));
    obj.put(DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from("2.25.723651"),
    ));

    if let Some(patient_id) = params.patient_id {
        obj.put(DataElement::new(
            tags::PATIENT_ID,
            VR::LO,
            PrimitiveValue::from(patient_id),
        ));
    }
    if let Some(study_date) = params.study_date {
        obj.put(DataElement::new(
            tags::STUDY_DATE,
            VR::DA,
            PrimitiveValue::from(study_date),
        ));
    }
    if let Some(study_time) = params.study_time {
        obj.put(DataElement::new(
            tags::STUDY_TIME,
            VR::TM,
            PrimitiveValue::from(study_time),
        ));
    }
    if let Some(instance_number) = params.instance_number {
        obj.put(DataElement::new(
            tags::INSTANCE_NUMBER,
            VR::IS,
            PrimitiveValue::from(instance_number.to_string()),
        ));
    }
    if let Some(laterality) = params.laterality {
        obj.put(DataElement::new(
            tags::IMAGE_LATERALITY,
            VR::CS,
            PrimitiveValue::from(laterality),
        ));
    }

    if params.with_pixels {
        let (samples, photometric, pixels): (u16, &str, Vec<u8>) = if params.rgb {
            (3, "RGB", (0..48).collect())
        } else {
            (1, "MONOCHROME2", (0..16).collect())
        };

        obj.put(DataElement::new(
            tags::ROWS,
            VR::US,
            PrimitiveValue::from(4_u16),
        ));
        obj.put(DataElement::new(
            tags::COLUMNS,
            VR::US,
            PrimitiveValue::from(4_u16),
        ));
        obj.put(DataElement::new(
            tags::BITS_ALLOCATED,
            VR::US,
            PrimitiveValue::from(8_u16),
        ));
        obj.put(DataElement::new(
            tags::BITS_STORED,
            VR::US,
            PrimitiveValue::from(8_u16),
        ));
        obj.put(DataElement::new(
            tags::HIGH_BIT,
            VR::US,
            PrimitiveValue::from(7_u16),
        ));
        obj.put(DataElement::new(
            tags::PIXEL_REPRESENTATION,
            VR::US,
            PrimitiveValue::from(0_u16),
        ));
        obj.put(DataElement::new(
            tags::SAMPLES_PER_PIXEL,
            VR::US,
            PrimitiveValue::from(samples),
        ));
        if params.rgb {
            obj.put(DataElement::new(
                tags::PLANAR_CONFIGURATION,
                VR::US,
                PrimitiveValue::from(0_u16),
            ));
        }
        obj.put(DataElement::new(
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            PrimitiveValue::from(photometric),
        ));
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::from(pixels),
        ));
    }

    let file_obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("2.25.723651")
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
        )
        .expect("valid file meta");
    file_obj.write_to_file(path).expect("write test dicom");
}
