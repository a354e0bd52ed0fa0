use anyhow::{Context, Result};
use lopdf::Document as PdfDocument;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Every strategy failed. Attempts are kept in order so diagnostics can
/// report what each extractor said, not just the last one.
#[derive(Debug)]
pub struct ExtractionError {
    pub attempts: Vec<StrategyFailure>,
}

#[derive(Debug)]
pub struct StrategyFailure {
    pub strategy: &'static str,
    pub message: String,
}

impl ExtractionError {
    /// Message of the last strategy tried.
    pub fn last_message(&self) -> Option<&str> {
        self.attempts.last().map(|a| a.message.as_str())
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text extraction failed")?;
        for attempt in &self.attempts {
            write!(f, "; {}: {}", attempt.strategy, attempt.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExtractionError {}

struct Strategy {
    name: &'static str,
    run: fn(&Path) -> Result<String>,
}

/// Best-effort PDF text extraction over an ordered list of strategies.
pub struct TextExtractor {
    strategies: Vec<Strategy>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Strategy {
                    name: "lopdf",
                    run: extract_with_lopdf,
                },
                Strategy {
                    name: "pdf-extract",
                    run: extract_with_pdf_extract,
                },
            ],
        }
    }

    /// Try each strategy in order, returning the first success. When all of
    /// them fail the error carries every attempt, last strategy last.
    pub fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let mut attempts = Vec::new();

        for strategy in &self.strategies {
            match (strategy.run)(path) {
                Ok(text) => {
                    debug!(
                        "Extracted {} characters from {:?} via {}",
                        text.len(),
                        path,
                        strategy.name
                    );
                    return Ok(text);
                }
                Err(e) => {
                    warn!("{} extraction failed for {:?}: {:#}", strategy.name, path, e);
                    attempts.push(StrategyFailure {
                        strategy: strategy.name,
                        message: format!("{:#}", e),
                    });
                }
            }
        }

        Err(ExtractionError { attempts })
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Primary strategy: walk pages in order and concatenate their text.
///
/// A page that cannot be parsed fails the whole strategy; the document
/// handle is dropped on every exit path.
fn extract_with_lopdf(path: &Path) -> Result<String> {
    let doc = PdfDocument::load(path).context("failed to load PDF file")?;
    let mut text = String::new();

    for (page_num, _) in doc.get_pages() {
        let page_text = doc
            .extract_text(&[page_num])
            .with_context(|| format!("failed to extract text from page {}", page_num))?;
        text.push_str(&page_text);
    }

    Ok(text)
}

/// Fallback strategy: whole-document extraction via pdf-extract, whose
/// layout reconstruction holds up better on tabular pages. Pages with no
/// extractable text contribute an empty string rather than an error.
fn extract_with_pdf_extract(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path).context("pdf-extract failed to parse document")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_reports_both_strategies() {
        let extractor = TextExtractor::new();
        let err = extractor
            .extract(Path::new("/nonexistent/document.pdf"))
            .unwrap_err();

        assert_eq!(err.attempts.len(), 2);
        assert_eq!(err.attempts[0].strategy, "lopdf");
        assert_eq!(err.attempts[1].strategy, "pdf-extract");

        let message = err.to_string();
        assert!(message.contains("lopdf"));
        assert!(message.contains("pdf-extract"));
    }

    #[test]
    fn test_garbage_bytes_fail_both_strategies() {
        let mut file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .unwrap();
        file.write_all(b"this is not a pdf at all").unwrap();

        let extractor = TextExtractor::new();
        let err = extractor.extract(file.path()).unwrap_err();

        assert_eq!(err.attempts.len(), 2);
        // The caller primarily observes the fallback's error
        assert_eq!(err.last_message(), Some(err.attempts[1].message.as_str()));
    }
}
