//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `docx` - DOCX archive handling and placeholder rendering
//! - `templates` - template asset storage
//! - `history` - history log persistence
//! - `http` - REST API exposure

pub mod docx;
pub mod history;
pub mod http;
pub mod templates;

pub use docx::PlaceholderDocxRenderer;
pub use history::{InMemoryHistoryRepository, JsonFileHistoryRepository};
pub use templates::FsTemplateStore;
