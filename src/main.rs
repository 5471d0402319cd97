//! PoA Forge server binary.
//!
//! Loads configuration from the environment, wires the storage adapters
//! into the generation pipeline, and serves the HTTP API until a
//! shutdown signal arrives.

use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use poa_forge::adapters::http::{app_router, DocumentHandlers, HistoryHandlers};
use poa_forge::adapters::{FsTemplateStore, JsonFileHistoryRepository, PlaceholderDocxRenderer};
use poa_forge::application::{GenerateDocumentHandler, HistoryStore};
use poa_forge::config::{AppConfig, ServerConfig};
use poa_forge::ports::{DocumentRenderer, HistoryRepository, TemplateStore};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .init();

    info!(
        environment = ?config.server.environment,
        templates_dir = %config.storage.templates_dir.display(),
        history_path = %config.storage.history_path.display(),
        "Starting PoA Forge"
    );

    // Build port implementations
    let template_store: Arc<dyn TemplateStore> =
        Arc::new(FsTemplateStore::new(&config.storage.templates_dir));
    let renderer: Arc<dyn DocumentRenderer> = Arc::new(PlaceholderDocxRenderer::new());
    let repository: Arc<dyn HistoryRepository> =
        Arc::new(JsonFileHistoryRepository::new(&config.storage.history_path));

    // Wire the application layer
    let history = Arc::new(HistoryStore::new(repository));
    let generate_handler = Arc::new(GenerateDocumentHandler::new(
        template_store,
        renderer,
        Arc::clone(&history),
    ));

    let document_handlers = DocumentHandlers::new(Arc::clone(&generate_handler));
    let history_handlers = HistoryHandlers::new(history, generate_handler);

    // Build router with middleware
    let app = app_router(document_handlers, history_handlers).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors(&config.server)),
    );

    // Bind and serve
    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));
    info!("PoA Forge listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .expect("Server error");

    info!("PoA Forge stopped");
}

/// Build the CORS layer from configuration.
///
/// With no configured origins every origin is allowed, which suits the
/// local single-page frontend this service was built for.
fn build_cors(server: &ServerConfig) -> CorsLayer {
    let configured = server.cors_origins_list();
    if configured.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
