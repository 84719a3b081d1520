use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, RenderEngine, TextExtractor};
use crate::domain::{Document, DocumentFormat, ExtractedText};

/// Reads ODT text back out of the tree produced by an injected [`RenderEngine`].
pub struct OdtAdapter {
    engine: Arc<dyn RenderEngine>,
}

impl OdtAdapter {
    pub fn new(engine: Arc<dyn RenderEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl TextExtractor for OdtAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        if document.format != DocumentFormat::Odt {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let rendered = self
            .engine
            .render(document.data.clone())
            .await
            .map_err(|e| ExtractionError::RenderFailed(e.to_string()))?;

        let text = rendered.text_content();
        tracing::info!(chars = text.len(), "ODT render complete");

        if text.is_empty() {
            return Err(ExtractionError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::new(text))
    }
}
