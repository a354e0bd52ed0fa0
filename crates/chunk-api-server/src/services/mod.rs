pub mod document_service;
pub mod registry;

pub use document_service::DocumentService;
pub use registry::{DocumentRegistry, DocumentSummary, StoredDocument};
