use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use chunk_api_server::build_router;
use chunk_api_server::config::Settings;
use chunk_api_server::document::TextChunker;
use chunk_api_server::services::{DocumentRegistry, DocumentService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,chunk_api_server=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting chunk API server...");

    // Load configuration (invalid chunk geometry fails here)
    let settings = Settings::load()?;
    info!("Configuration loaded");

    // Chunker geometry validated once, at construction
    let chunker = TextChunker::new(settings.chunking.clone())?;

    let registry = Arc::new(DocumentRegistry::new());
    let document_service = Arc::new(DocumentService::new(chunker, registry.clone()));

    let app = build_router(
        document_service,
        registry,
        settings.upload.max_file_size_mb,
    );

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
