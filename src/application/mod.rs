//! Application layer - command handlers and services.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! the generation flow drives one submission end to end, and the history
//! store manages the durable log of past generations.

pub mod generate_flow;
pub mod history_store;

pub use generate_flow::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
pub use history_store::HistoryStore;
