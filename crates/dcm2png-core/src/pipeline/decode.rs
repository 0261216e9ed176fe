//! DICOM dataset decoding and pixel materialization.

use std::path::Path;

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags;
use dicom_object::{open_file, DefaultDicomObject};
use dicom_pixeldata::PixelDecoder;
use image::DynamicImage;

use crate::error::ConvertError;

/// Opens DICOM datasets and materializes their pixel data.
pub struct DatasetDecoder;

impl DatasetDecoder {
    /// Open and parse a DICOM file into an in-memory dataset.
    pub fn open(path: &Path) -> Result<DefaultDicomObject, ConvertError> {
        open_file(path).map_err(|e| ConvertError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether the dataset carries a PixelData element.
    pub fn has_pixel_data(obj: &DefaultDicomObject) -> bool {
        obj.element(tags::PIXEL_DATA).is_ok()
    }

    /// Pin the photometric interpretation of color datasets to `YBR_FULL`.
    ///
    /// Color-subsampled JPEG pixel data mis-renders unless the tag is
    /// overridden before materialization. Single-sample (monochrome)
    /// datasets keep their declared interpretation.
    pub fn normalize_photometric(obj: &mut DefaultDicomObject) {
        let samples = obj
            .element(tags::SAMPLES_PER_PIXEL)
            .ok()
            .and_then(|e| e.to_int::<u16>().ok())
            .unwrap_or(1);

        if samples == 3 {
            obj.put(DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                PrimitiveValue::from("YBR_FULL"),
            ));
        }
    }

    /// Materialize the dataset's pixel buffer as a dynamic image.
    pub fn materialize(
        obj: &DefaultDicomObject,
        path: &Path,
    ) -> Result<DynamicImage, ConvertError> {
        let pixels = obj.decode_pixel_data().map_err(|e| ConvertError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        pixels
            .to_dynamic_image(0)
            .map_err(|e| ConvertError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testdata::{write_test_dicom, TestDicom};

    #[test]
    fn test_open_rejects_non_dicom_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.dcm");
        std::fs::write(&path, b"this is not a dicom file").unwrap();

        let err = DatasetDecoder::open(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_has_pixel_data() {
        let dir = tempfile::tempdir().unwrap();

        let with = dir.path().join("with.dcm");
        write_test_dicom(&with, &TestDicom::default());
        let obj = DatasetDecoder::open(&with).unwrap();
        assert!(DatasetDecoder::has_pixel_data(&obj));

        let without = dir.path().join("without.dcm");
        write_test_dicom(
            &without,
            &TestDicom {
                with_pixels: false,
                ..TestDicom::default()
            },
        );
        let obj = DatasetDecoder::open(&without).unwrap();
        assert!(!DatasetDecoder::has_pixel_data(&obj));
    }

    #[test]
    fn test_materialize_monochrome_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.dcm");
        write_test_dicom(&path, &TestDicom::default());

        let obj = DatasetDecoder::open(&path).unwrap();
        let image = DatasetDecoder::materialize(&obj, &path).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
    }

    #[test]
    fn test_normalize_photometric_leaves_monochrome_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.dcm");
        write_test_dicom(&path, &TestDicom::default());

        let mut obj = DatasetDecoder::open(&path).unwrap();
        DatasetDecoder::normalize_photometric(&mut obj);

        let photometric = obj
            .element(tags::PHOTOMETRIC_INTERPRETATION)
            .unwrap()
            .to_str()
            .unwrap()
            .trim()
            .to_string();
        assert_eq!(photometric, "MONOCHROME2");
    }

    #[test]
    fn test_normalize_photometric_pins_color_to_ybr_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.dcm");
        write_test_dicom(
            &path,
            &TestDicom {
                rgb: true,
                ..TestDicom::default()
            },
        );

        let mut obj = DatasetDecoder::open(&path).unwrap();
        DatasetDecoder::normalize_photometric(&mut obj);

        let photometric = obj
            .element(tags::PHOTOMETRIC_INTERPRETATION)
            .unwrap()
            .to_str()
            .unwrap()
            .trim()
            .to_string();
        assert_eq!(photometric, "YBR_FULL");
    }
}
