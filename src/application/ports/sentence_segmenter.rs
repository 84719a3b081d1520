use crate::domain::Sentence;

pub trait SentenceSegmenter: Send + Sync {
    /// Returns every sentence of `text` in document order.
    fn segment(&self, text: &str) -> Vec<Sentence>;
}
