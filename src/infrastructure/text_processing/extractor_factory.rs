use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{RenderEngine, TextExtractor};
use crate::domain::DocumentFormat;
use crate::infrastructure::rendering::OdfRenderEngine;

use super::{CompositeExtractor, DocxAdapter, OdtAdapter, PdfAdapter};

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Registers the PDF, DOCX and ODT adapters, with ODT rendered by `engine`.
    pub fn create(timeout: Duration, engine: Arc<dyn RenderEngine>) -> CompositeExtractor {
        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfAdapter::with_timeout(timeout));
        let docx: Arc<dyn TextExtractor> = Arc::new(DocxAdapter::new());
        let odt: Arc<dyn TextExtractor> = Arc::new(OdtAdapter::new(engine));

        tracing::info!(timeout_secs = timeout.as_secs(), "Registering document extractors");

        CompositeExtractor::new(vec![
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, docx),
            (DocumentFormat::Odt, odt),
        ])
    }

    pub fn create_default(timeout: Duration) -> CompositeExtractor {
        Self::create(timeout, Arc::new(OdfRenderEngine::with_timeout(timeout)))
    }
}
