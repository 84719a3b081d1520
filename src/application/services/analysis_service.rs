use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::application::ports::{Classifier, SentenceSegmenter, ServiceError};
use crate::domain::{AnalysisResult, ClassificationVerdict, Excerpt, Sentence};
use crate::infrastructure::observability::preview_text;

/// Classifies a document sentence by sentence and aggregates the verdicts.
pub struct AnalysisService<C: ?Sized>
where
    C: Classifier,
{
    classifier: Arc<C>,
    segmenter: Arc<dyn SentenceSegmenter>,
    max_concurrency: usize,
}

impl<C: ?Sized> AnalysisService<C>
where
    C: Classifier,
{
    pub fn new(classifier: Arc<C>, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        Self {
            classifier,
            segmenter,
            max_concurrency: 1,
        }
    }

    /// Allows up to `max_concurrency` classification requests in flight.
    /// Results are still folded in document order.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub async fn check_availability(&self) -> bool {
        self.classifier.check_health().await
    }

    pub async fn ensure_available(&self) -> Result<(), ServiceError> {
        if self.check_availability().await {
            Ok(())
        } else {
            tracing::warn!("Classification service failed its health check");
            Err(ServiceError::Unavailable)
        }
    }

    #[tracing::instrument(
        skip(self, document_text),
        fields(text_len = document_text.len(), max_concurrency = self.max_concurrency)
    )]
    pub async fn analyze(&self, document_text: &str) -> AnalysisResult {
        let sentences = self.segmenter.segment(document_text);
        let total_sentences = sentences.len();

        if total_sentences == 0 {
            tracing::info!("No sentences to classify");
            return AnalysisResult::empty();
        }

        let classifier = Arc::clone(&self.classifier);
        let outcomes: Vec<(Sentence, Result<ClassificationVerdict, ServiceError>)> =
            stream::iter(sentences.into_iter().enumerate())
                .map(|(index, sentence)| classify_sentence(Arc::clone(&classifier), index, sentence))
                .buffered(self.max_concurrency)
                .collect()
                .await;

        let mut excerpts = Vec::new();
        let mut failed_sentences = 0usize;

        for (sentence, outcome) in &outcomes {
            match outcome {
                Ok(verdict) if verdict.is_detection() => {
                    excerpts.push(Excerpt::from_sentence(sentence, verdict.confidence));
                }
                Ok(_) => {}
                Err(_) => failed_sentences += 1,
            }
        }

        let result = AnalysisResult::from_sentences(total_sentences, excerpts);

        tracing::info!(
            total_sentences = result.total_sentences,
            detected_sentences = result.detected_sentences,
            failed_sentences,
            score = result.score,
            "Document analysis complete"
        );

        result
    }
}

async fn classify_sentence<C: Classifier + ?Sized>(
    classifier: Arc<C>,
    index: usize,
    sentence: Sentence,
) -> (Sentence, Result<ClassificationVerdict, ServiceError>) {
    let outcome = classifier.classify(&sentence.text).await;

    if let Err(e) = &outcome {
        tracing::warn!(
            sentence_index = index,
            start_offset = sentence.start_offset,
            end_offset = sentence.end_offset,
            sentence = %preview_text(&sentence.text),
            error = %e,
            "Sentence classification failed, skipping"
        );
    }

    (sentence, outcome)
}
