use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({size})")]
    OverlapTooLarge { size: usize, overlap: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChunkerConfig {
    /// Maximum words per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Words repeated between consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl ChunkerConfig {
    /// Reject geometry that would make the stride non-positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                size: self.chunk_size,
                overlap: self.chunk_overlap,
            });
        }
        Ok(())
    }

    /// Words advanced between the starts of consecutive chunks.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub text: String,
    pub chunk_index: usize,
    pub start_word_offset: usize,
    pub word_count: usize,
}

/// Splits text into overlapping fixed-size word windows.
#[derive(Debug)]
pub struct TextChunker {
    config: ChunkerConfig,
}

impl TextChunker {
    /// Configuration is validated once here, never per call.
    pub fn new(config: ChunkerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let stride = self.config.stride();

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < words.len() {
            let end = (start + self.config.chunk_size).min(words.len());
            let window = &words[start..end];

            chunks.push(Chunk {
                text: window.join(" "),
                chunk_index: chunks.len(),
                start_word_offset: start,
                word_count: window.len(),
            });

            start += stride;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(size: usize, overlap: usize) -> TextChunker {
        TextChunker::new(ChunkerConfig {
            chunk_size: size,
            chunk_overlap: overlap,
        })
        .unwrap()
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunks = chunker(4, 2).chunk("");
        assert!(chunks.is_empty());

        let chunks = chunker(4, 2).chunk("   \n\t  ");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_yields_single_chunk() {
        let chunks = chunker(10, 3).chunk("one two three");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "one two three");
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[0].start_word_offset, 0);
        assert_eq!(chunks[0].word_count, 3);
    }

    #[test]
    fn test_overlapping_windows() {
        // stride = 4 - 2 = 2, eight words -> starts at 0, 2, 4, 6
        let chunks = chunker(4, 2).chunk("a b c d e f g h");

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].text, "a b c d");
        assert_eq!(chunks[1].text, "c d e f");
        assert_eq!(chunks[2].text, "e f g h");
        assert_eq!(chunks[3].text, "g h");

        assert_eq!(chunks[0].start_word_offset, 0);
        assert_eq!(chunks[1].start_word_offset, 2);
        assert_eq!(chunks[2].start_word_offset, 4);
        assert_eq!(chunks[3].start_word_offset, 6);

        assert_eq!(chunks[3].word_count, 2);
    }

    #[test]
    fn test_offsets_advance_by_stride() {
        let config = ChunkerConfig {
            chunk_size: 7,
            chunk_overlap: 3,
        };
        let stride = config.stride();
        let text = (0..100)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join(" ");

        let chunks = TextChunker::new(config).unwrap().chunk(&text);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i);
            assert_eq!(chunk.start_word_offset, i * stride);
        }

        // Final chunk must reach the end of the text
        let last = chunks.last().unwrap();
        assert!(last.start_word_offset + last.word_count >= 100);
    }

    #[test]
    fn test_whitespace_normalized_in_chunk_text() {
        let chunks = chunker(10, 0).chunk("a\tb\n\nc   d");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "a b c d");
    }

    #[test]
    fn test_overlap_equal_to_size_rejected() {
        let err = TextChunker::new(ChunkerConfig {
            chunk_size: 4,
            chunk_overlap: 4,
        })
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::OverlapTooLarge {
                size: 4,
                overlap: 4
            }
        );
    }

    #[test]
    fn test_overlap_greater_than_size_rejected() {
        assert!(TextChunker::new(ChunkerConfig {
            chunk_size: 4,
            chunk_overlap: 5,
        })
        .is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = TextChunker::new(ChunkerConfig {
            chunk_size: 0,
            chunk_overlap: 0,
        })
        .unwrap_err();

        assert_eq!(err, ConfigError::ZeroChunkSize);
    }

    #[test]
    fn test_chunk_serializes_with_positional_metadata() {
        let chunks = chunker(4, 2).chunk("a b c d e f");
        let value = serde_json::to_value(&chunks[1]).unwrap();

        assert_eq!(value["text"], "c d e f");
        assert_eq!(value["chunk_index"], 1);
        assert_eq!(value["start_word_offset"], 2);
        assert_eq!(value["word_count"], 4);
    }
}
