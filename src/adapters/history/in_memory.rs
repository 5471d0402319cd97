//! In-memory history repository for tests and development.
//!
//! Keeps the whole log behind a mutex with no persistence across
//! restarts. Deployments wanting a durable log should use the
//! JSON file adapter instead.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::history::HistoryLog;
use crate::ports::{HistoryRepository, HistoryStoreError};

/// In-memory implementation of the `HistoryRepository` port.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. This is
/// acceptable for the test and development scenarios this adapter
/// targets.
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    log: Mutex<HistoryLog>,
}

impl InMemoryHistoryRepository {
    /// Creates a repository holding the empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `log`.
    pub fn with_log(log: HistoryLog) -> Self {
        Self {
            log: Mutex::new(log),
        }
    }

    /// Returns a copy of the stored log (for test assertions).
    pub fn stored(&self) -> HistoryLog {
        self.log
            .lock()
            .expect("InMemoryHistoryRepository: log lock poisoned")
            .clone()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn load(&self) -> Result<HistoryLog, HistoryStoreError> {
        Ok(self.stored())
    }

    async fn save(&self, log: &HistoryLog) -> Result<(), HistoryStoreError> {
        *self
            .log
            .lock()
            .expect("InMemoryHistoryRepository: log lock poisoned") = log.clone();
        Ok(())
    }
}
