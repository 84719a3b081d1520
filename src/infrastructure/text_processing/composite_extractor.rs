use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat, ExtractedText};

/// Dispatches each document to the extractor registered for its format.
pub struct CompositeExtractor {
    extractors: HashMap<DocumentFormat, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(extractors: Vec<(DocumentFormat, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.extractors.contains_key(&format)
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        let extractor = self.extractors.get(&document.format).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(document.format.as_str().to_string())
        })?;

        extractor.extract(document).await
    }
}
