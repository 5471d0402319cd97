//! HistoryRepository port for persisting the history log.

use async_trait::async_trait;

use crate::domain::history::HistoryLog;

/// Errors that can occur during history persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStoreError {
    /// Reading or writing the backing store failed.
    Io(String),
    /// The log could not be converted to or from its stored form.
    Serialization(String),
}

impl std::fmt::Display for HistoryStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "History storage IO error: {}", msg),
            Self::Serialization(msg) => write!(f, "History serialization error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryStoreError {}

/// Whole-log persistence for the history of generated documents.
///
/// # Contract
///
/// Implementations must:
/// - Persist the log as a single value; `save` replaces it atomically and
///   a reader never observes a partially written log
/// - Load an absent or unparsable store as the empty log rather than
///   failing, so corrupted state never blocks the application
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the persisted log, or the empty log when none is readable.
    async fn load(&self) -> Result<HistoryLog, HistoryStoreError>;

    /// Replaces the persisted log with `log`.
    async fn save(&self, log: &HistoryLog) -> Result<(), HistoryStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_displays_message() {
        let err = HistoryStoreError::Io("disk full".to_string());
        assert_eq!(err.to_string(), "History storage IO error: disk full");
    }

    #[test]
    fn serialization_error_displays_message() {
        let err = HistoryStoreError::Serialization("bad json".to_string());
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn history_repository_is_object_safe() {
        fn check<T: HistoryRepository + ?Sized>() {}
        // This compiles only if the trait is object-safe
        check::<dyn HistoryRepository>();
    }
}
