use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use crate::document::ProcessingResult;

#[derive(Debug, Clone, Serialize)]
pub struct StoredDocument {
    pub id: Uuid,
    pub uploaded_at: DateTime<Utc>,
    pub result: ProcessingResult,
}

/// List view without chunk bodies.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub total_chunks: usize,
    pub total_chars: usize,
}

/// In-memory store of processed documents. State lives and dies with the
/// process; this is not a persistence layer.
#[derive(Default)]
pub struct DocumentRegistry {
    documents: DashMap<Uuid, StoredDocument>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    pub fn insert(&self, result: ProcessingResult) -> StoredDocument {
        let document = StoredDocument {
            id: Uuid::new_v4(),
            uploaded_at: Utc::now(),
            result,
        };
        self.documents.insert(document.id, document.clone());
        document
    }

    pub fn get(&self, id: &Uuid) -> Option<StoredDocument> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, id: &Uuid) -> Option<StoredDocument> {
        self.documents.remove(id).map(|(_, document)| document)
    }

    /// Summaries, newest upload first.
    pub fn list(&self) -> Vec<DocumentSummary> {
        let mut summaries: Vec<DocumentSummary> = self
            .documents
            .iter()
            .map(|entry| DocumentSummary {
                id: entry.id,
                filename: entry.result.filename.clone(),
                uploaded_at: entry.uploaded_at,
                total_chunks: entry.result.total_chunks,
                total_chars: entry.result.total_chars,
            })
            .collect();
        summaries.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        summaries
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
