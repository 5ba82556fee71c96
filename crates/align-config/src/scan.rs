//! Link scanning settings.

use align_core::fields::{AREA_DELIMITER, MIGRATION_MARKER};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_marker() -> String {
    MIGRATION_MARKER.to_string()
}

const fn default_delimiter() -> char {
    AREA_DELIMITER
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Link comment prefix identifying links created by the copy tool.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Area path segment separator.
    #[serde(default = "default_delimiter")]
    pub area_delimiter: char,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            area_delimiter: default_delimiter(),
        }
    }
}

impl ScanConfig {
    /// Reject settings that would make every comment match or break path
    /// splitting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty marker or a blank
    /// delimiter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.marker".into(),
                reason: "marker must not be empty".into(),
            });
        }
        if self.area_delimiter.is_whitespace() {
            return Err(ConfigError::InvalidValue {
                field: "scan.area_delimiter".into(),
                reason: "delimiter must be a visible character".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScanConfig::default();
        assert_eq!(config.marker, "TF237027");
        assert_eq!(config.area_delimiter, '\\');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_marker_is_rejected() {
        let config = ScanConfig {
            marker: "  ".into(),
            ..ScanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "scan.marker"
        ));
    }

    #[test]
    fn blank_delimiter_is_rejected() {
        let config = ScanConfig {
            area_delimiter: ' ',
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
