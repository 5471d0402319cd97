//! HTTP handlers for document generation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{package_response, ErrorResponse};
use crate::application::{GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler};
use crate::domain::document::LengthVariant;

use super::dto::GenerateDocxRequest;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DocumentHandlers {
    generate_handler: Arc<GenerateDocumentHandler>,
}

impl DocumentHandlers {
    pub fn new(generate_handler: Arc<GenerateDocumentHandler>) -> Self {
        Self { generate_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/generate-docx - Generate and download a document
pub async fn generate_docx(
    State(handlers): State<DocumentHandlers>,
    Json(req): Json<GenerateDocxRequest>,
) -> Response {
    let cmd = GenerateDocumentCommand::new(
        req.document_type,
        LengthVariant::from_is_short(req.is_short),
        req.data,
    );

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => package_response(result.package),
        Err(e) => handle_generate_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Browser contract: every generation failure is a 500 with a JSON
/// error body. Validation detail is folded into the message.
fn handle_generate_error(error: GenerateDocumentError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(error.to_string())),
    )
        .into_response()
}
