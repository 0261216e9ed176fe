//! Sub-configuration structs with defaults.

use serde::{Deserialize, Serialize};

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Maximum number of concurrent conversion workers
    pub max_workers: usize,

    /// File extension to match during discovery (case-insensitive,
    /// without the leading dot)
    pub extension: String,

    /// Create the output directory when it does not exist
    pub create_output_dir: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_workers: 64,
            extension: "dcm".to_string(),
            create_output_dir: true,
        }
    }
}

/// Output naming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix appended to the metadata fields in every output filename
    pub suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            suffix: "out".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
