//! Single-file conversion: decode, extract, name, encode.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use tempfile::NamedTempFile;

use crate::error::ConvertError;
use crate::pipeline::decode::DatasetDecoder;
use crate::pipeline::metadata::MetadataExtractor;
use crate::pipeline::naming::output_path;

/// Converts one DICOM file to a PNG named from its metadata.
///
/// This is the unit of work the dispatcher hands to the pool. It owns no
/// shared state and performs its own blocking I/O, so any number of
/// converters can run side by side.
#[derive(Debug, Clone)]
pub struct DcmConverter {
    out_dir: PathBuf,
    suffix: String,
}

impl DcmConverter {
    /// Create a converter writing into `out_dir` with the given filename
    /// suffix.
    pub fn new(out_dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            suffix: suffix.into(),
        }
    }

    /// Convert a single file, returning the path of the PNG written.
    ///
    /// Overwrites an existing file at the synthesized path silently.
    pub fn convert(&self, path: &Path) -> Result<PathBuf, ConvertError> {
        tracing::debug!("Converting {:?}", path);

        let mut dataset = DatasetDecoder::open(path)?;
        if !DatasetDecoder::has_pixel_data(&dataset) {
            return Err(ConvertError::MissingPixelData {
                path: path.to_path_buf(),
            });
        }

        DatasetDecoder::normalize_photometric(&mut dataset);
        let image = DatasetDecoder::materialize(&dataset, path)?;

        let meta = MetadataExtractor::extract(&dataset);
        let dest = output_path(&self.out_dir, &meta, &self.suffix);

        self.write_png(&image, &dest, path)?;
        tracing::debug!("Wrote {:?}", dest);
        Ok(dest)
    }

    /// Encode to PNG in memory, then move the finished file into place.
    ///
    /// The temp-file rename keeps a partial output from surviving a
    /// failed encode or an interrupted write.
    fn write_png(
        &self,
        image: &DynamicImage,
        dest: &Path,
        input: &Path,
    ) -> Result<(), ConvertError> {
        let encode_err = |message: String| ConvertError::Encode {
            path: input.to_path_buf(),
            message,
        };

        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| encode_err(e.to_string()))?;

        let mut tmp =
            NamedTempFile::new_in(&self.out_dir).map_err(|e| encode_err(e.to_string()))?;
        tmp.write_all(&buf).map_err(|e| encode_err(e.to_string()))?;
        tmp.persist(dest).map_err(|e| encode_err(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testdata::{write_test_dicom, TestDicom};

    #[test]
    fn test_convert_writes_png_named_from_metadata() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("scan.dcm");
        write_test_dicom(&input, &TestDicom::default());

        let converter = DcmConverter::new(output_dir.path(), "out");
        let dest = converter.convert(&input).unwrap();

        assert_eq!(
            dest.file_name().unwrap().to_string_lossy(),
            "P1___1_?_out.png"
        );
        let image = image::open(&dest).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
    }

    #[test]
    fn test_convert_uses_all_metadata_fields() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("scan.dcm");
        write_test_dicom(
            &input,
            &TestDicom {
                patient_id: Some("P42"),
                study_date: Some("20240102"),
                study_time: Some("134500"),
                instance_number: Some(7),
                laterality: Some("R"),
                ..TestDicom::default()
            },
        );

        let converter = DcmConverter::new(output_dir.path(), "xray");
        let dest = converter.convert(&input).unwrap();

        assert_eq!(
            dest.file_name().unwrap().to_string_lossy(),
            "P42_20240102_134500_7_R_xray.png"
        );
    }

    #[test]
    fn test_convert_fails_without_pixel_data() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("meta_only.dcm");
        write_test_dicom(
            &input,
            &TestDicom {
                with_pixels: false,
                ..TestDicom::default()
            },
        );

        let converter = DcmConverter::new(output_dir.path(), "out");
        let err = converter.convert(&input).unwrap_err();
        assert!(matches!(err, ConvertError::MissingPixelData { .. }));

        // Failed conversions leave nothing behind
        assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_convert_fails_on_unreadable_input() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("junk.dcm");
        std::fs::write(&input, b"definitely not dicom").unwrap();

        let converter = DcmConverter::new(output_dir.path(), "out");
        let err = converter.convert(&input).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_convert_is_idempotent_and_overwrites() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("scan.dcm");
        write_test_dicom(&input, &TestDicom::default());

        let converter = DcmConverter::new(output_dir.path(), "out");
        let first = converter.convert(&input).unwrap();
        let first_bytes = std::fs::read(&first).unwrap();
        let second = converter.convert(&input).unwrap();
        let second_bytes = std::fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_bytes, second_bytes);
        // Only the final PNG remains, no stray temp files
        assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 1);
    }
}
