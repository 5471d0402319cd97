//! HistoryStore - application service for the generated document log.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::foundation::RecordId;
use crate::domain::history::{GeneratedDocumentRecord, HistoryLog};
use crate::ports::{HistoryRepository, HistoryStoreError};

/// Application service managing the durable log of generated documents.
///
/// Mutations are read-modify-write cycles over the whole log, serialized
/// by an internal lock so concurrent callers never interleave a load and
/// a save. Reads degrade a failing load to the empty log so a broken
/// store never blocks the rest of the application; mutations propagate
/// load failures instead, so a transient read error can never cause a
/// save that wipes existing records.
pub struct HistoryStore {
    repository: Arc<dyn HistoryRepository>,
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Adds a record as the most recent entry.
    pub async fn append(&self, record: GeneratedDocumentRecord) -> Result<(), HistoryStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut log = self.repository.load().await?;
        log.append(record);
        self.repository.save(&log).await?;

        tracing::info!(records = log.len(), "Appended record to document history");
        Ok(())
    }

    /// Returns all records, most recent first.
    pub async fn list(&self) -> Vec<GeneratedDocumentRecord> {
        self.load_degraded().await.records().to_vec()
    }

    /// Returns records matching `term`, most recent first.
    ///
    /// An empty term matches everything.
    pub async fn search(&self, term: &str) -> Vec<GeneratedDocumentRecord> {
        self.load_degraded()
            .await
            .search(term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns the record with `id`, if present.
    pub async fn find(&self, id: &RecordId) -> Option<GeneratedDocumentRecord> {
        self.load_degraded().await.find(id).cloned()
    }

    /// Removes the record with `id`, returning true if one was removed.
    ///
    /// Removing an unknown id is a no-op and does not rewrite the store.
    pub async fn remove(&self, id: &RecordId) -> Result<bool, HistoryStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut log = self.repository.load().await?;
        if !log.remove(id) {
            return Ok(false);
        }
        self.repository.save(&log).await?;

        tracing::info!(record_id = %id, "Removed record from document history");
        Ok(true)
    }

    /// Empties the log.
    pub async fn clear(&self) -> Result<(), HistoryStoreError> {
        let _guard = self.write_lock.lock().await;

        self.repository.save(&HistoryLog::empty()).await?;

        tracing::info!("Cleared document history");
        Ok(())
    }

    /// Loads the log for a read, treating a failing load as empty.
    async fn load_degraded(&self) -> HistoryLog {
        match self.repository.load().await {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(error = %e, "History load failed, reading as empty log");
                HistoryLog::empty()
            }
        }
    }
}
