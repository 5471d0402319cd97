//! HTTP adapters - REST API implementations.
//!
//! Each API area has its own HTTP adapter for endpoint exposure; this
//! module carries the pieces shared by all of them: the error body, the
//! download response shape and the assembled application router.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::domain::document::DownloadPackage;

pub mod documents;
pub mod history;

pub use documents::{document_routes, DocumentHandlers};
pub use history::{history_routes, HistoryHandlers};

// ════════════════════════════════════════════════════════════════════════════
// Shared response pieces
// ════════════════════════════════════════════════════════════════════════════

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Builds the download response for a packaged document.
///
/// The body is the raw DOCX bytes; the filename travels in the
/// `Content-Disposition` header.
pub(crate) fn package_response(package: DownloadPackage) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, package.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", package.filename()),
            ),
        ],
        package.into_bytes(),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Application router
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Assembles the full API router.
///
/// Middleware (tracing, CORS) is layered on by the binary; tests can
/// drive this router directly.
pub fn app_router(documents: DocumentHandlers, history: HistoryHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", document_routes(documents))
        .nest("/api/history", history_routes(history))
}
