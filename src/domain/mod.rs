mod analysis;
mod document;
mod document_id;
mod extracted_text;
mod sentence;
mod verdict;

pub use analysis::{AnalysisResult, Excerpt, score};
pub use document::{Document, DocumentFormat};
pub use document_id::DocumentId;
pub use extracted_text::ExtractedText;
pub use sentence::{MIN_SENTENCE_CHARS, Sentence};
pub use verdict::{ClassificationVerdict, FLAG_THRESHOLD, VerdictLabel};
