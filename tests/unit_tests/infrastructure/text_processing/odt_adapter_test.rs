use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use docscreen::application::ports::{
    DomNode, ExtractionError, RenderEngine, RenderError, RenderedDocument, TextExtractor,
};
use docscreen::domain::{Document, DocumentFormat};
use docscreen::infrastructure::rendering::OdfRenderEngine;
use docscreen::infrastructure::text_processing::OdtAdapter;

use crate::support::odt_bytes;

struct FixedEngine(DomNode);

#[async_trait]
impl RenderEngine for FixedEngine {
    async fn render(&self, _data: Bytes) -> Result<RenderedDocument, RenderError> {
        Ok(RenderedDocument::new(self.0.clone()))
    }
}

struct BrokenEngine;

#[async_trait]
impl RenderEngine for BrokenEngine {
    async fn render(&self, _data: Bytes) -> Result<RenderedDocument, RenderError> {
        Err(RenderError::TimedOut)
    }
}

fn odt_document(data: Vec<u8>) -> Document {
    Document::new("minutes.odt".to_string(), DocumentFormat::Odt, data)
}

fn paragraph(text: &str) -> DomNode {
    DomNode::Element {
        name: "text:p".to_string(),
        block: true,
        children: vec![DomNode::Text(text.to_string())],
    }
}

#[tokio::test]
async fn given_injected_engine_when_extracting_then_uses_its_tree() {
    let root = DomNode::Element {
        name: "office:text".to_string(),
        block: false,
        children: vec![paragraph("From the engine."), paragraph("Second block.")],
    };
    let adapter = OdtAdapter::new(Arc::new(FixedEngine(root)));

    let extracted = adapter.extract(&odt_document(Vec::new())).await.unwrap();

    assert_eq!(extracted.text, "From the engine.\n\nSecond block.");
}

#[tokio::test]
async fn given_failing_engine_when_extracting_then_returns_render_failed() {
    let adapter = OdtAdapter::new(Arc::new(BrokenEngine));

    let result = adapter.extract(&odt_document(Vec::new())).await;

    assert!(matches!(result, Err(ExtractionError::RenderFailed(_))));
}

#[tokio::test]
async fn given_engine_without_text_when_extracting_then_returns_no_text_found() {
    let root = DomNode::Element {
        name: "office:text".to_string(),
        block: false,
        children: vec![paragraph("   ")],
    };
    let adapter = OdtAdapter::new(Arc::new(FixedEngine(root)));

    let result = adapter.extract(&odt_document(Vec::new())).await;

    assert!(matches!(result, Err(ExtractionError::NoTextFound(ref name)) if name == "minutes.odt"));
}

#[tokio::test]
async fn given_docx_document_when_extracting_with_odt_adapter_then_returns_unsupported_format() {
    let adapter = OdtAdapter::new(Arc::new(BrokenEngine));
    let document = Document::new("letter.docx".to_string(), DocumentFormat::Docx, Vec::new());

    let result = adapter.extract(&document).await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedFormat(ref tag)) if tag == "docx"));
}

#[tokio::test]
async fn given_real_odt_package_when_extracting_with_odf_engine_then_returns_paragraph_text() {
    let adapter = OdtAdapter::new(Arc::new(OdfRenderEngine::new()));
    let document = odt_document(odt_bytes(
        r#"<text:h text:outline-level="1">Agenda</text:h><text:p>Budget <text:span>review</text:span>.</text:p><text:p/><text:p>Next steps.</text:p>"#,
    ));

    let extracted = adapter.extract(&document).await.unwrap();

    assert_eq!(extracted.text, "Agenda\n\nBudget review.\n\nNext steps.");
}
