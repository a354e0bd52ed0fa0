use axum::{
    extract::{Extension, Multipart},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::services::DocumentService;
use crate::utils::error::ApiError;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub document_id: Uuid,
    pub filename: String,
    pub total_chunks: usize,
    pub total_chars: usize,
}

pub async fn upload_handler(
    Extension(document_service): Extension<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    info!("File upload request received");

    let mut file_data: Option<Bytes> = None;
    let mut filename: Option<String> = None;

    // Parse multipart form
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read field: {}", e)))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "file" {
            filename = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?,
            );
        }
    }

    let file_data =
        file_data.ok_or_else(|| ApiError::BadRequest("file field required".to_string()))?;
    let filename =
        filename.ok_or_else(|| ApiError::BadRequest("filename required".to_string()))?;

    match document_service.process_upload(&filename, &file_data).await {
        Ok(stored) => {
            info!(
                "Successfully processed document {} with {} chunks",
                stored.id, stored.result.total_chunks
            );

            Ok(Json(UploadResponse {
                document_id: stored.id,
                filename: stored.result.filename,
                total_chunks: stored.result.total_chunks,
                total_chars: stored.result.total_chars,
            }))
        }
        Err(e) => {
            error!("Failed to process upload: {}", e);
            Err(e)
        }
    }
}
