//! HTTP adapter for history endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HistoryQuery, HistoryRecordResponse};
pub use handlers::HistoryHandlers;
pub use routes::history_routes;
