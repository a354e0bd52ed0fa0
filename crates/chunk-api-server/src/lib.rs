use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod config;
pub mod document;
pub mod handlers;
pub mod services;
pub mod utils;

use services::{DocumentRegistry, DocumentService};

/// Assemble the application router with all middleware layers.
pub fn build_router(
    document_service: Arc<DocumentService>,
    registry: Arc<DocumentRegistry>,
    max_upload_mb: usize,
) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    let api_routes = Router::new()
        .route("/api/upload", post(handlers::upload::upload_handler))
        .route(
            "/api/documents",
            get(handlers::documents::list_documents_handler),
        )
        .route(
            "/api/documents/{id}",
            get(handlers::documents::get_document_handler)
                .delete(handlers::documents::delete_document_handler),
        )
        .layer(Extension(document_service))
        .layer(Extension(registry));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        // pdf parsing panics must not take the worker down
        .layer(CatchPanicLayer::new())
        // Body limit for uploads
        .layer(DefaultBodyLimit::max(max_upload_mb * 1024 * 1024))
}
