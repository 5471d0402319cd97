//! TemplateStore port - read access to the template assets.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::TemplateId;

/// Errors that can occur while loading a template asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateStoreError {
    /// No asset exists for the requested template.
    #[error("Template asset not found: {0}")]
    NotFound(String),

    /// The asset exists but could not be read.
    #[error("Failed to read template asset: {0}")]
    Io(String),
}

impl TemplateStoreError {
    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}

/// Read-only access to the four template assets.
///
/// # Contract
///
/// Implementations must:
/// - Read the asset fresh on every call, never caching between calls
/// - Never mutate the assets
/// - Report a missing asset as `NotFound` and any other failure as `Io`
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Loads the raw template bytes for `template_id`.
    async fn fetch(&self, template_id: TemplateId) -> Result<Vec<u8>, TemplateStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_displays_message() {
        let err = TemplateStoreError::not_found("company-full.docx");
        assert_eq!(err.to_string(), "Template asset not found: company-full.docx");
    }

    #[test]
    fn io_error_displays_message() {
        let err = TemplateStoreError::io("permission denied");
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn template_store_is_object_safe() {
        fn check<T: TemplateStore + ?Sized>() {}
        // This compiles only if the trait is object-safe
        check::<dyn TemplateStore>();
    }
}
