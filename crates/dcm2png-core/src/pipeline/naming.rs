//! Output filename synthesis from extracted metadata.

use std::path::{Path, PathBuf};

use crate::types::ImageMeta;

/// Build the output path for a converted image.
///
/// The filename is the five metadata fields and the suffix joined with
/// underscores, under `out_dir`. Identical metadata yields identical
/// paths; the converter overwrites on collision, so the last writer wins.
pub fn output_path(out_dir: &Path, meta: &ImageMeta, suffix: &str) -> PathBuf {
    out_dir.join(format!(
        "{}_{}_{}_{}_{}_{}.png",
        meta.patient_id,
        meta.study_date,
        meta.study_time,
        meta.instance_number,
        meta.laterality,
        suffix
    ))
}
