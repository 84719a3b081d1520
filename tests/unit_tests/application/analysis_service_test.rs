use std::sync::Arc;

use docscreen::application::ports::{SentenceSegmenter, ServiceError};
use docscreen::application::services::AnalysisService;
use docscreen::domain::VerdictLabel;
use docscreen::infrastructure::text_processing::PunctuationSegmenter;

use crate::support::{Reply, ScriptedClassifier};

fn service(classifier: Arc<ScriptedClassifier>) -> AnalysisService<ScriptedClassifier> {
    let segmenter: Arc<dyn SentenceSegmenter> = Arc::new(PunctuationSegmenter::default());
    AnalysisService::new(classifier, segmenter)
}

#[tokio::test]
async fn given_one_benign_and_one_flagged_sentence_when_analyzing_then_scores_fifty() {
    let text = "This is fine. This is bad content!";
    let classifier = Arc::new(
        ScriptedClassifier::new()
            .reply("This is fine.", Reply::Verdict(VerdictLabel::Benign, 0.9))
            .reply("This is bad content!", Reply::Verdict(VerdictLabel::Flagged, 0.8)),
    );

    let result = service(Arc::clone(&classifier)).analyze(text).await;

    assert_eq!(result.total_sentences, 2);
    assert_eq!(result.detected_sentences, 1);
    assert_eq!(result.score, 50);
    assert_eq!(result.excerpts.len(), 1);

    let excerpt = &result.excerpts[0];
    assert_eq!(excerpt.text, "This is bad content!");
    assert!((excerpt.confidence - 80.0).abs() < 1e-9);
    assert_eq!(&text[excerpt.start_offset..excerpt.end_offset], excerpt.text);
}

#[tokio::test]
async fn given_empty_text_when_analyzing_then_returns_zero_result_without_classifying() {
    let classifier = Arc::new(ScriptedClassifier::new());

    let result = service(Arc::clone(&classifier)).analyze("").await;

    assert_eq!(result.total_sentences, 0);
    assert_eq!(result.score, 0);
    assert!(result.excerpts.is_empty());
    assert!(classifier.calls().is_empty());
}

#[tokio::test]
async fn given_every_classification_failing_when_analyzing_then_completes_with_zero_score() {
    let classifier = Arc::new(ScriptedClassifier::new().default_reply(Reply::Fail));

    let result = service(Arc::clone(&classifier))
        .analyze("First sentence here. Second sentence here. Third sentence here.")
        .await;

    assert_eq!(result.total_sentences, 3);
    assert_eq!(result.detected_sentences, 0);
    assert_eq!(result.score, 0);
    assert!(result.excerpts.is_empty());
    assert_eq!(classifier.calls().len(), 3);
}

#[tokio::test]
async fn given_one_failing_sentence_when_analyzing_then_remaining_sentences_still_count() {
    let classifier = Arc::new(
        ScriptedClassifier::new()
            .default_reply(Reply::Verdict(VerdictLabel::Flagged, 0.9))
            .reply("Second sentence here.", Reply::Fail),
    );

    let result = service(Arc::clone(&classifier))
        .analyze("First sentence here. Second sentence here. Third sentence here.")
        .await;

    assert_eq!(result.total_sentences, 3);
    assert_eq!(result.detected_sentences, 2);
    assert_eq!(result.score, 67);
    assert_eq!(classifier.calls().len(), 3);
    assert_eq!(result.excerpts[0].text, "First sentence here.");
    assert_eq!(result.excerpts[1].text, "Third sentence here.");
}

#[tokio::test]
async fn given_flagged_verdicts_around_threshold_when_analyzing_then_only_strictly_above_count() {
    let classifier = Arc::new(
        ScriptedClassifier::new()
            .reply("Exactly at threshold.", Reply::Verdict(VerdictLabel::Flagged, 0.6))
            .reply("Just above threshold.", Reply::Verdict(VerdictLabel::Flagged, 0.61))
            .reply("Confidently benign.", Reply::Verdict(VerdictLabel::Benign, 0.99)),
    );

    let result = service(classifier)
        .analyze("Exactly at threshold. Just above threshold. Confidently benign.")
        .await;

    assert_eq!(result.total_sentences, 3);
    assert_eq!(result.detected_sentences, 1);
    assert_eq!(result.excerpts[0].text, "Just above threshold.");
    assert_eq!(result.score, 33);
}

#[tokio::test]
async fn given_short_sentences_when_analyzing_then_they_are_neither_classified_nor_counted() {
    let classifier = Arc::new(
        ScriptedClassifier::new().default_reply(Reply::Verdict(VerdictLabel::Flagged, 0.9)),
    );

    let result = service(Arc::clone(&classifier))
        .analyze("Hi. Ok! This one counts.")
        .await;

    assert_eq!(result.total_sentences, 1);
    assert_eq!(result.detected_sentences, 1);
    assert_eq!(result.score, 100);
    assert_eq!(classifier.calls(), vec!["This one counts.".to_string()]);
}

#[tokio::test]
async fn given_same_text_and_deterministic_classifier_when_analyzing_twice_then_results_match() {
    let classifier = Arc::new(
        ScriptedClassifier::new()
            .reply("Flag this sentence.", Reply::Verdict(VerdictLabel::Flagged, 0.7)),
    );
    let service = service(classifier);
    let text = "Keep this sentence. Flag this sentence. Keep this one too.";

    let first = service.analyze(text).await;
    let second = service.analyze(text).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_default_settings_when_analyzing_then_classifies_one_sentence_at_a_time() {
    let classifier = Arc::new(
        ScriptedClassifier::new().default_reply(Reply::Slow(5, VerdictLabel::Benign, 0.9)),
    );

    service(Arc::clone(&classifier))
        .analyze("One sentence here. Two sentence here. Three sentence here.")
        .await;

    assert_eq!(classifier.max_in_flight(), 1);
}

#[tokio::test]
async fn given_bounded_concurrency_when_later_sentences_finish_first_then_excerpts_keep_document_order() {
    let classifier = Arc::new(
        ScriptedClassifier::new()
            .reply("Alpha is flagged.", Reply::Slow(60, VerdictLabel::Flagged, 0.9))
            .reply("Bravo is flagged.", Reply::Slow(40, VerdictLabel::Flagged, 0.8))
            .reply("Charlie is benign.", Reply::Slow(30, VerdictLabel::Benign, 0.9))
            .reply("Delta is flagged.", Reply::Slow(1, VerdictLabel::Flagged, 0.7))
            .reply("Echo is flagged.", Reply::Slow(1, VerdictLabel::Flagged, 0.95))
            .reply("Foxtrot is benign.", Reply::Slow(1, VerdictLabel::Benign, 0.9)),
    );
    let service = service(Arc::clone(&classifier)).with_max_concurrency(4);
    let text = "Alpha is flagged. Bravo is flagged. Charlie is benign. \
                Delta is flagged. Echo is flagged. Foxtrot is benign.";

    let result = service.analyze(text).await;

    let texts: Vec<&str> = result.excerpts.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Alpha is flagged.",
            "Bravo is flagged.",
            "Delta is flagged.",
            "Echo is flagged."
        ]
    );
    assert_eq!(result.detected_sentences, result.excerpts.len());
    assert_eq!(result.total_sentences, 6);
    assert_eq!(result.score, 67);
    assert_eq!(classifier.max_in_flight(), 4);
}

#[tokio::test]
async fn given_excerpts_when_analyzing_then_offsets_slice_back_to_excerpt_text() {
    let classifier = Arc::new(
        ScriptedClassifier::new().default_reply(Reply::Verdict(VerdictLabel::Flagged, 0.9)),
    );
    let text = "Première phrase ici.\n\nDeuxième phrase là!   Troisième?";

    let result = service(classifier).analyze(text).await;

    assert_eq!(result.total_sentences, 3);
    for excerpt in &result.excerpts {
        assert_eq!(&text[excerpt.start_offset..excerpt.end_offset], excerpt.text);
    }
}

#[tokio::test]
async fn given_unhealthy_classifier_when_ensuring_availability_then_returns_unavailable() {
    let classifier = Arc::new(ScriptedClassifier::new().unhealthy());

    let outcome = service(classifier).ensure_available().await;

    assert!(matches!(outcome, Err(ServiceError::Unavailable)));
}

#[tokio::test]
async fn given_healthy_classifier_when_ensuring_availability_then_succeeds() {
    let classifier = Arc::new(ScriptedClassifier::new());

    assert!(service(classifier).ensure_available().await.is_ok());
}

#[tokio::test]
async fn given_zero_concurrency_when_configuring_then_still_classifies_sequentially() {
    let classifier = Arc::new(ScriptedClassifier::new());

    let result = service(Arc::clone(&classifier))
        .with_max_concurrency(0)
        .analyze("Still gets classified.")
        .await;

    assert_eq!(result.total_sentences, 1);
    assert_eq!(classifier.max_in_flight(), 1);
}
