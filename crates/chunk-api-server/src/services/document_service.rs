use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::{DocumentProcessor, TextChunker};
use crate::services::registry::{DocumentRegistry, StoredDocument};
use crate::utils::error::ApiError;

pub struct DocumentService {
    processor: DocumentProcessor,
    registry: Arc<DocumentRegistry>,
}

impl DocumentService {
    pub fn new(chunker: TextChunker, registry: Arc<DocumentRegistry>) -> Self {
        Self {
            processor: DocumentProcessor::new(chunker),
            registry,
        }
    }

    /// Process uploaded file: validate -> stage -> extract -> chunk -> register
    pub async fn process_upload(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<StoredDocument, ApiError> {
        info!("Processing upload: {} ({} bytes)", filename, data.len());

        Self::validate_pdf_filename(filename)?;

        let temp_file = Self::stage_upload(data).await?;
        let result = self.processor.process(&temp_file);

        // Temp file is removed on success and failure alike
        let _ = tokio::fs::remove_file(&temp_file).await;

        let mut processed =
            result.map_err(|e| ApiError::ExtractionFailed(e.to_string()))?;
        // The staged path carries a synthetic name; keep the client's
        processed.filename = filename.to_string();

        let stored = self.registry.insert(processed);
        info!(
            "Document {} registered with {} chunks",
            stored.id, stored.result.total_chunks
        );

        Ok(stored)
    }

    fn validate_pdf_filename(filename: &str) -> Result<(), ApiError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        if extension.as_deref() != Some("pdf") {
            return Err(ApiError::UnsupportedMediaType(format!(
                "Only PDF files are supported, got: {}",
                filename
            )));
        }

        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        if mime != mime_guess::mime::APPLICATION_PDF {
            return Err(ApiError::UnsupportedMediaType(format!(
                "Unsupported media type: {}",
                mime
            )));
        }

        Ok(())
    }

    async fn stage_upload(data: &[u8]) -> Result<PathBuf, ApiError> {
        let temp_file = std::env::temp_dir().join(format!("upload_{}.pdf", Uuid::new_v4()));

        tokio::fs::write(&temp_file, data)
            .await
            .map_err(|e| ApiError::InternalError(format!("Failed to write temp file: {}", e)))?;

        debug!("Staged upload at {:?}", temp_file);
        Ok(temp_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ChunkerConfig;

    fn service() -> DocumentService {
        let chunker = TextChunker::new(ChunkerConfig::default()).unwrap();
        DocumentService::new(chunker, Arc::new(DocumentRegistry::new()))
    }

    #[tokio::test]
    async fn test_non_pdf_filename_rejected() {
        let err = service()
            .process_upload("notes.txt", b"hello")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnsupportedMediaType(_)));
    }

    #[tokio::test]
    async fn test_missing_extension_rejected() {
        let err = service().process_upload("notes", b"hello").await.unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMediaType(_)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_surfaces_extraction_failure() {
        let err = service()
            .process_upload("broken.pdf", b"not a pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ExtractionFailed(_)));
    }
}
