//! HTTP handlers for history endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{package_response, ErrorResponse};
use crate::application::{GenerateDocumentHandler, HistoryStore};
use crate::domain::foundation::RecordId;
use crate::ports::HistoryStoreError;

use super::dto::{HistoryQuery, HistoryRecordResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct HistoryHandlers {
    history: Arc<HistoryStore>,
    generate_handler: Arc<GenerateDocumentHandler>,
}

impl HistoryHandlers {
    pub fn new(history: Arc<HistoryStore>, generate_handler: Arc<GenerateDocumentHandler>) -> Self {
        Self {
            history,
            generate_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/history - List records, optionally filtered by ?q=term
pub async fn list_history(
    State(handlers): State<HistoryHandlers>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let records = match query.q {
        Some(term) => handlers.history.search(&term).await,
        None => handlers.history.list().await,
    };

    let body: Vec<HistoryRecordResponse> = records.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(body)).into_response()
}

/// POST /api/history/:id/download - Re-render a stored record
///
/// Re-downloading never appends a new record.
pub async fn download_record(
    State(handlers): State<HistoryHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(record_id) = id.parse::<RecordId>() else {
        return record_not_found(&id);
    };
    let Some(record) = handlers.history.find(&record_id).await else {
        return record_not_found(&id);
    };

    match handlers.generate_handler.regenerate(&record).await {
        Ok(package) => package_response(package),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}

/// DELETE /api/history/:id - Remove one record
///
/// Responds 204 whether or not the id named a stored record.
pub async fn delete_record(
    State(handlers): State<HistoryHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(record_id) = id.parse::<RecordId>() else {
        // An unparsable id cannot name a stored record.
        return StatusCode::NO_CONTENT.into_response();
    };

    match handlers.history.remove(&record_id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_history_error(e),
    }
}

/// DELETE /api/history - Clear the whole log
pub async fn clear_history(State(handlers): State<HistoryHandlers>) -> Response {
    match handlers.history.clear().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_history_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn record_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("History record not found: {}", id))),
    )
        .into_response()
}

fn handle_history_error(error: HistoryStoreError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(error.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_record_maps_to_404() {
        let response = record_not_found("b2c3");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn history_store_error_maps_to_500() {
        let response = handle_history_error(HistoryStoreError::Io("disk full".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
