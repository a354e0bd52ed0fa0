use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::chunker::{Chunk, TextChunker};
use super::extractor::{ExtractionError, TextExtractor};

#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    pub filename: String,
    pub full_text: String,
    pub chunks: Vec<Chunk>,
    pub total_chunks: usize,
    pub total_chars: usize,
}

/// Extraction then chunking, assembled into a single result.
pub struct DocumentProcessor {
    extractor: TextExtractor,
    chunker: TextChunker,
}

impl DocumentProcessor {
    pub fn new(chunker: TextChunker) -> Self {
        Self {
            extractor: TextExtractor::new(),
            chunker,
        }
    }

    /// Each call is stateless; empty extracted text is a valid result with
    /// zero chunks, not an error.
    pub fn process(&self, path: &Path) -> Result<ProcessingResult, ExtractionError> {
        let full_text = self.extractor.extract(path)?;
        let chunks = self.chunker.chunk(&full_text);

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let total_chunks = chunks.len();
        let total_chars = full_text.chars().count();

        debug!(
            "Processed {}: {} chunks, {} characters",
            filename, total_chunks, total_chars
        );

        Ok(ProcessingResult {
            filename,
            full_text,
            chunks,
            total_chunks,
            total_chars,
        })
    }
}
