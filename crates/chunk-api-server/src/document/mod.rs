pub mod chunker;
pub mod extractor;
pub mod processor;

pub use chunker::{Chunk, ChunkerConfig, ConfigError, TextChunker};
pub use extractor::{ExtractionError, TextExtractor};
pub use processor::{DocumentProcessor, ProcessingResult};
