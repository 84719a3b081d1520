use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat, ExtractedText};

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// One entry per page. A page that fails to parse contributes an empty string.
    fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::NoTextFound(format!("failed to open PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::NoTextFound(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(raw) => {
                    let text = join_tokens(&raw);
                    tracing::debug!(page = page_index + 1, chars = text.len(), "Processed page");
                    pages.push(text);
                }
                Err(e) => {
                    tracing::warn!(page = page_index + 1, error = %e, "Failed to extract page, skipping");
                    pages.push(String::new());
                }
            }
        }

        Ok(pages)
    }
}

/// Joins the page's text tokens with single spaces.
fn join_tokens(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        if document.format != DocumentFormat::Pdf {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            ExtractionError::IoFailure(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(&document.data).map_err(|e| {
            ExtractionError::IoFailure(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let span = tracing::Span::current();

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || span.in_scope(|| Self::extract_pages(&temp_path))),
        )
        .await
        .map_err(|_| {
            tracing::warn!(
                timeout_secs = self.timeout.as_secs(),
                size_bytes = document.data.len(),
                "PDF extraction timed out"
            );
            ExtractionError::IoFailure("PDF extraction timed out".to_string())
        })?
        .map_err(|e| ExtractionError::IoFailure(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = pages
            .into_iter()
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

        if text.is_empty() {
            return Err(ExtractionError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::new(text))
    }
}
