use async_trait::async_trait;
use bytes::Bytes;

/// A rendering engine that loads a document package into a DOM-like tree.
#[async_trait]
pub trait RenderEngine: Send + Sync {
    async fn render(&self, data: Bytes) -> Result<RenderedDocument, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid document package: {0}")]
    InvalidPackage(String),
    #[error("malformed document content: {0}")]
    MalformedContent(String),
    #[error("render timed out")]
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Element {
        name: String,
        block: bool,
        children: Vec<DomNode>,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub root: DomNode,
}

impl RenderedDocument {
    pub fn new(root: DomNode) -> Self {
        Self { root }
    }

    /// Flattens the tree to text. Every block element becomes its own paragraph;
    /// paragraphs are separated by a blank line and blank ones are dropped.
    pub fn text_content(&self) -> String {
        let mut paragraphs = Vec::new();
        let mut current = String::new();

        collect_text(&self.root, &mut current, &mut paragraphs);
        flush_paragraph(&mut current, &mut paragraphs);

        paragraphs.join("\n\n")
    }
}

fn collect_text(node: &DomNode, current: &mut String, paragraphs: &mut Vec<String>) {
    match node {
        DomNode::Text(text) => current.push_str(text),
        DomNode::Element {
            block: true,
            children,
            ..
        } => {
            flush_paragraph(current, paragraphs);
            for child in children {
                collect_text(child, current, paragraphs);
            }
            flush_paragraph(current, paragraphs);
        }
        DomNode::Element { children, .. } => {
            for child in children {
                collect_text(child, current, paragraphs);
            }
        }
    }
}

fn flush_paragraph(current: &mut String, paragraphs: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}
