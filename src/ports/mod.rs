//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TemplateStore` - Read access to the four template assets
//! - `DocumentRenderer` - Placeholder binding into template bytes
//! - `HistoryRepository` - Whole-log persistence for generation history

mod document_renderer;
mod history_repository;
mod template_store;

pub use document_renderer::{DocumentRenderer, RenderError};
pub use history_repository::{HistoryRepository, HistoryStoreError};
pub use template_store::{TemplateStore, TemplateStoreError};
