//! dcm2png core - DICOM-to-PNG batch conversion library.
//!
//! Converts directory trees of DICOM files into PNG images named from
//! their embedded metadata, running conversions concurrently across a
//! bounded worker pool.
//!
//! # Architecture
//!
//! ```text
//! Directory → Discover → [N workers: Decode → Extract → Name → Encode] → Ordered results
//! ```
//!
//! Results are collected and reported in discovery order regardless of
//! completion order, and one file's failure never aborts the batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dcm2png_core::{BatchDispatcher, DcmConverter, FileDiscovery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let files = FileDiscovery::new("dcm").discover("./dicom".as_ref());
//!     let converter = DcmConverter::new("./png", "out");
//!     let results = BatchDispatcher::new(64)
//!         .run(&files, move |path| converter.convert(path), |_, _| {})
//!         .await;
//!     println!("{} converted", results.iter().filter(|r| r.is_success()).count());
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{BatchError, ConfigError, ConvertError, ConvertOutcome, Dcm2PngError, Result};
pub use pipeline::{
    ensure_input_dir, ensure_output_dir, BatchDispatcher, DcmConverter, FileDiscovery,
    MetadataExtractor, SourceFile,
};
pub use report::Reporter;
pub use types::{ConversionResult, ImageMeta, Laterality};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
