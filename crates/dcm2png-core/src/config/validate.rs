//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.max_workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.max_workers must be > 0".into(),
            ));
        }
        if self.processing.extension.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.extension must not be empty".into(),
            ));
        }
        if self.processing.extension.starts_with('.') {
            return Err(ConfigError::ValidationError(
                "processing.extension must not include the leading dot".into(),
            ));
        }
        Ok(())
    }
}
