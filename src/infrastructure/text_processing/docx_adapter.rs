use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::markup::strip_markup;
use super::package::read_entry;

const DOCUMENT_PART: &str = "word/document.xml";

/// Converts a DOCX package to HTML, then strips the markup to plain text.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// Renders the runs of `word/document.xml` as an HTML fragment with one `<p>` per paragraph.
pub fn docx_to_html(data: &[u8]) -> Result<String, ExtractionError> {
    let xml = read_entry(data, DOCUMENT_PART)
        .map_err(|e| ExtractionError::ConversionFailed(e.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut html = String::with_capacity(xml.len() / 4);
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => html.push_str("<p>"),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => html.push_str("</p>\n"),
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => html.push_str("<p></p>\n"),
                b"w:tab" => html.push('\t'),
                b"w:br" | b"w:cr" => html.push_str("<br/>"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let text = e.unescape().map_err(|err| {
                    ExtractionError::ConversionFailed(format!("invalid text run: {err}"))
                })?;
                html.push_str(&escape(text.as_ref()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::ConversionFailed(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    Ok(html)
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        if document.format != DocumentFormat::Docx {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let data = document.data.clone();
        let html = tokio::task::spawn_blocking(move || docx_to_html(&data))
            .await
            .map_err(|e| ExtractionError::IoFailure(format!("task join error: {e}")))??;

        let text = strip_markup(&html);
        tracing::info!(html_len = html.len(), chars = text.len(), "DOCX conversion complete");

        if text.is_empty() {
            return Err(ExtractionError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::new(text))
    }
}
