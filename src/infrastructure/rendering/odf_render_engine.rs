use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::application::ports::{DomNode, RenderEngine, RenderError, RenderedDocument};
use crate::infrastructure::text_processing::package::{PackageError, read_entry};

const ODT_MIMETYPE: &str = "application/vnd.oasis.opendocument.text";
const CONTENT_PART: &str = "content.xml";
const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads an OpenDocument text package and materializes `content.xml` as a node tree.
pub struct OdfRenderEngine {
    timeout: Duration,
}

impl Default for OdfRenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OdfRenderEngine {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_RENDER_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl RenderEngine for OdfRenderEngine {
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    async fn render(&self, data: Bytes) -> Result<RenderedDocument, RenderError> {
        let span = tracing::Span::current();

        tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || span.in_scope(|| materialize(&data))),
        )
        .await
        .map_err(|_| RenderError::TimedOut)?
        .map_err(|e| RenderError::InvalidPackage(format!("render task join error: {e}")))?
    }
}

fn materialize(data: &[u8]) -> Result<RenderedDocument, RenderError> {
    match read_entry(data, "mimetype") {
        Ok(mimetype) if mimetype.trim() != ODT_MIMETYPE => {
            return Err(RenderError::InvalidPackage(format!(
                "unexpected mimetype {}",
                mimetype.trim()
            )));
        }
        Ok(_) | Err(PackageError::MissingEntry(_)) => {}
        Err(e) => return Err(RenderError::InvalidPackage(e.to_string())),
    }

    let xml =
        read_entry(data, CONTENT_PART).map_err(|e| RenderError::InvalidPackage(e.to_string()))?;

    let root = build_tree(&xml)?;
    tracing::debug!("ODT content tree materialized");

    Ok(RenderedDocument::new(root))
}

struct OpenElement {
    name: String,
    block: bool,
    children: Vec<DomNode>,
}

impl OpenElement {
    fn new(name: String) -> Self {
        let block = is_block(&name);
        Self {
            name,
            block,
            children: Vec::new(),
        }
    }

    fn close(self) -> DomNode {
        DomNode::Element {
            name: self.name,
            block: self.block,
            children: self.children,
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(name, "text:p" | "text:h")
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// `text:s` carries the number of spaces in `text:c`, defaulting to one.
fn space_count(e: &BytesStart<'_>) -> usize {
    let Ok(Some(attr)) = e.try_get_attribute("text:c") else {
        return 1;
    };

    attr.unescape_value()
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    out
}

fn build_tree(xml: &str) -> Result<DomNode, RenderError> {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![OpenElement::new("#document".to_string())];
    let mut block_depth = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| {
            RenderError::MalformedContent(format!(
                "{CONTENT_PART} at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(e) => {
                let element = OpenElement::new(element_name(&e));
                if element.block {
                    block_depth += 1;
                }
                stack.push(element);
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(RenderError::MalformedContent(
                        "unbalanced closing tag".to_string(),
                    ));
                }
                let Some(element) = stack.pop() else { break };
                if element.block {
                    block_depth -= 1;
                }
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element.close());
                }
            }
            Event::Empty(e) => {
                let node = match e.name().as_ref() {
                    b"text:s" => DomNode::Text(" ".repeat(space_count(&e))),
                    b"text:tab" => DomNode::Text("\t".to_string()),
                    b"text:line-break" => DomNode::Text("\n".to_string()),
                    _ => OpenElement::new(element_name(&e)).close(),
                };
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(node);
                }
            }
            Event::Text(e) if block_depth > 0 => {
                let text = e
                    .unescape()
                    .map_err(|err| RenderError::MalformedContent(err.to_string()))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(DomNode::Text(collapse_whitespace(&text)));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(RenderError::MalformedContent(format!(
            "{} unclosed element(s) at end of {CONTENT_PART}",
            stack.len() - 1
        )));
    }

    stack
        .pop()
        .map(OpenElement::close)
        .ok_or_else(|| RenderError::MalformedContent("empty document".to_string()))
}
