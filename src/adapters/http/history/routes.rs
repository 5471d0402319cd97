//! HTTP routes for history endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    clear_history, delete_record, download_record, list_history, HistoryHandlers,
};

/// Creates the history router with all endpoints.
pub fn history_routes(handlers: HistoryHandlers) -> Router {
    Router::new()
        .route("/", get(list_history))
        .route("/", delete(clear_history))
        .route("/:id", delete(delete_record))
        .route("/:id/download", post(download_record))
        .with_state(handlers)
}
