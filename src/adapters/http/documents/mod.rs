//! HTTP adapter for document generation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::GenerateDocxRequest;
pub use handlers::DocumentHandlers;
pub use routes::document_routes;
