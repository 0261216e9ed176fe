//! Error types for the dcm2png conversion pipeline.
//!
//! Errors split into two tiers: batch-fatal errors that abort before any
//! work is dispatched, and per-file conversion errors that are caught at
//! the unit boundary and turned into failure results.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for dcm2png operations.
#[derive(Error, Debug)]
pub enum Dcm2PngError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Batch-level errors raised before dispatch
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors that abort a batch before any conversion is dispatched.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Input path is missing or not a directory
    #[error("Input path is not a directory: {0}")]
    InvalidInputDir(PathBuf),

    /// Output path exists but is not a directory, or is missing and
    /// auto-creation is disabled
    #[error("Output path is not a directory: {0}")]
    InvalidOutputDir(PathBuf),

    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-file conversion errors.
///
/// These never abort the batch: the dispatcher converts them into failure
/// results and sibling conversions keep running.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source file is malformed or unreadable
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Valid DICOM file with no image payload
    #[error("No pixel data in {path}")]
    MissingPixelData { path: PathBuf },

    /// PNG encoding or output write failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The worker task died before producing an outcome (e.g. a panic in
    /// a codec)
    #[error("Conversion task failed for {path}: {message}")]
    Task { path: PathBuf, message: String },
}

/// Convenience type alias for dcm2png results.
pub type Result<T> = std::result::Result<T, Dcm2PngError>;

/// Outcome of a single file conversion.
pub type ConvertOutcome = std::result::Result<PathBuf, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_error_messages_name_the_file() {
        let err = ConvertError::MissingPixelData {
            path: PathBuf::from("/data/scan.dcm"),
        };
        assert!(err.to_string().contains("scan.dcm"));

        let err = ConvertError::Decode {
            path: PathBuf::from("/data/bad.dcm"),
            message: "premature end of file".into(),
        };
        assert!(err.to_string().contains("bad.dcm"));
        assert!(err.to_string().contains("premature end of file"));
    }

    #[test]
    fn batch_error_from_converts_into_top_level() {
        let err: Dcm2PngError = BatchError::InvalidInputDir(PathBuf::from("/nope")).into();
        assert!(matches!(err, Dcm2PngError::Batch(_)));
    }
}
