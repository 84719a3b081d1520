use std::sync::Arc;

use crate::application::ports::{Classifier, ExtractionError, ServiceError, TextExtractor};
use crate::domain::{AnalysisResult, Document, ExtractedText};

use super::analysis_service::AnalysisService;

/// Extracted text together with the analysis computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    pub text: ExtractedText,
    pub result: AnalysisResult,
}

pub struct DocumentService<E: ?Sized, C: ?Sized>
where
    E: TextExtractor,
    C: Classifier,
{
    extractor: Arc<E>,
    analysis_service: Arc<AnalysisService<C>>,
}

impl<E: ?Sized, C: ?Sized> DocumentService<E, C>
where
    E: TextExtractor,
    C: Classifier,
{
    pub fn new(extractor: Arc<E>, analysis_service: Arc<AnalysisService<C>>) -> Self {
        Self {
            extractor,
            analysis_service,
        }
    }

    pub async fn check_availability(&self) -> bool {
        self.analysis_service.check_availability().await
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id,
            filename = %document.filename,
            format = %document.format,
            size_bytes = document.size_bytes(),
        )
    )]
    pub async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        let extracted = self.extractor.extract(document).await?;
        tracing::info!(chars = extracted.text.chars().count(), "Text extraction complete");
        Ok(extracted)
    }

    pub async fn analyze_text(&self, document_text: &str) -> AnalysisResult {
        self.analysis_service.analyze(document_text).await
    }

    /// Health-gates the classifier before touching the document, then extracts and analyzes it.
    pub async fn analyze_document(&self, document: &Document) -> Result<DocumentReport, PipelineError> {
        self.analysis_service.ensure_available().await?;

        let text = self.extract(document).await?;
        let result = self.analysis_service.analyze(text.as_str()).await;

        Ok(DocumentReport { text, result })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("classifier: {0}")]
    Unavailable(#[from] ServiceError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
}
