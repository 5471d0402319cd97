//! JSON-file-backed history repository.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::history::HistoryLog;
use crate::ports::{HistoryRepository, HistoryStoreError};

/// History repository backed by a single JSON file.
///
/// The whole log is rewritten on every save. Writes go to a temporary
/// file first and are renamed into place, so a crash mid-write leaves
/// the previous log intact. An absent or unparsable file loads as the
/// empty log.
pub struct JsonFileHistoryRepository {
    file_path: PathBuf,
}

impl JsonFileHistoryRepository {
    /// Creates a repository persisting to `file_path`.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Ensures the parent directory of the history file exists.
    async fn ensure_dir_exists(&self) -> Result<(), HistoryStoreError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                HistoryStoreError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for JsonFileHistoryRepository {
    async fn load(&self) -> Result<HistoryLog, HistoryStoreError> {
        if !self.file_path.exists() {
            return Ok(HistoryLog::empty());
        }

        let bytes = fs::read(&self.file_path).await.map_err(|e| {
            HistoryStoreError::Io(format!(
                "Failed to read {}: {}",
                self.file_path.display(),
                e
            ))
        })?;

        match serde_json::from_slice(&bytes) {
            Ok(log) => Ok(log),
            Err(e) => {
                tracing::warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "History file is unparsable, starting from an empty log"
                );
                Ok(HistoryLog::empty())
            }
        }
    }

    async fn save(&self, log: &HistoryLog) -> Result<(), HistoryStoreError> {
        self.ensure_dir_exists().await?;

        let json = serde_json::to_string_pretty(log)
            .map_err(|e| HistoryStoreError::Serialization(e.to_string()))?;

        // Write to a temp file then rename so a reader never sees a
        // partially written log.
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, json.as_bytes()).await.map_err(|e| {
            HistoryStoreError::Io(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
        fs::rename(&temp_path, &self.file_path).await.map_err(|e| {
            HistoryStoreError::Io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.file_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
