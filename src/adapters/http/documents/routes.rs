//! HTTP routes for document generation endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate_docx, DocumentHandlers};

/// Creates the document generation router.
pub fn document_routes(handlers: DocumentHandlers) -> Router {
    Router::new()
        .route("/generate-docx", post(generate_docx))
        .with_state(handlers)
}
