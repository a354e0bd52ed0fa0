use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::services::registry::{DocumentRegistry, DocumentSummary, StoredDocument};
use crate::utils::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ListDocumentsResponse {
    pub documents: Vec<DocumentSummary>,
    pub total: usize,
}

pub async fn list_documents_handler(
    Extension(registry): Extension<Arc<DocumentRegistry>>,
) -> Result<Json<ListDocumentsResponse>, ApiError> {
    let documents = registry.list();
    let total = documents.len();

    Ok(Json(ListDocumentsResponse { documents, total }))
}

pub async fn get_document_handler(
    Extension(registry): Extension<Arc<DocumentRegistry>>,
    Path(document_id): Path<Uuid>,
) -> Result<Json<StoredDocument>, ApiError> {
    registry
        .get(&document_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Document {} not found", document_id)))
}

#[derive(Debug, Serialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Uuid,
    pub deleted: bool,
}

pub async fn delete_document_handler(
    Extension(registry): Extension<Arc<DocumentRegistry>>,
    Path(document_id): Path<Uuid>,
) -> Result<Json<DeleteDocumentResponse>, ApiError> {
    info!("Delete document request: {}", document_id);

    registry
        .remove(&document_id)
        .map(|document| {
            Json(DeleteDocumentResponse {
                document_id: document.id,
                deleted: true,
            })
        })
        .ok_or_else(|| ApiError::NotFound(format!("Document {} not found", document_id)))
}
