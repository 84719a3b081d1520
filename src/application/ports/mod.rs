mod classifier;
mod render_engine;
mod sentence_segmenter;
mod text_extractor;

pub use classifier::{Classifier, ServiceError};
pub use render_engine::{DomNode, RenderEngine, RenderError, RenderedDocument};
pub use sentence_segmenter::SentenceSegmenter;
pub use text_extractor::{ExtractionError, TextExtractor};
