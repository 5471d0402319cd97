//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the four template assets
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Path of the JSON history file
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.templates_dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidTemplatesDir);
        }
        if self.history_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidHistoryPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            history_path: default_history_path(),
        }
    }
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_history_path() -> PathBuf {
    PathBuf::from("data/history.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.history_path, PathBuf::from("data/history.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_templates_dir() {
        let config = StorageConfig {
            templates_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemplatesDir)
        ));
    }

    #[test]
    fn test_validation_empty_history_path() {
        let config = StorageConfig {
            history_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHistoryPath)
        ));
    }
}
