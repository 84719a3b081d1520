use async_trait::async_trait;

use crate::domain::{Document, ExtractedText};

/// Turns the raw bytes of a document into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no text found: {0}")]
    NoTextFound(String),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("render failed: {0}")]
    RenderFailed(String),
    #[error("io failure: {0}")]
    IoFailure(String),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}
