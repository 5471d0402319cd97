//! DocumentRenderer port - placeholder binding into template bytes.

use thiserror::Error;

use crate::domain::document::ValidatedFields;

/// Errors that can occur while rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template references a field the submission does not carry.
    #[error("Placeholder '{{{name}}}' has no matching field")]
    UnresolvedPlaceholder { name: String },

    /// The template bytes are not a usable document.
    #[error("Template is malformed: {0}")]
    MalformedTemplate(String),

    /// Rendering failed for a reason outside the template contents.
    #[error("Rendering failed: {0}")]
    Internal(String),
}

impl RenderError {
    /// Creates an unresolved placeholder error.
    pub fn unresolved_placeholder(name: impl Into<String>) -> Self {
        Self::UnresolvedPlaceholder { name: name.into() }
    }

    /// Creates a malformed template error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTemplate(message.into())
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Binds validated fields into template bytes.
///
/// # Contract
///
/// Implementations must:
/// - Substitute every `{fieldName}` placeholder with the matching field
/// - Fail fast on a placeholder with no matching field, never emitting a
///   document with silently blanked values
/// - Be pure given their inputs; repeated calls with the same template and
///   fields produce the same bytes
pub trait DocumentRenderer: Send + Sync {
    /// Renders `template` with `fields` bound into its placeholders.
    fn render(&self, template: &[u8], fields: &ValidatedFields) -> Result<Vec<u8>, RenderError>;
}
