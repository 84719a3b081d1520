use serde::Serialize;

use super::sentence::Sentence;

/// A flagged sentence with its confidence rescaled to a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Excerpt {
    pub text: String,
    pub confidence: f64,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Excerpt {
    pub fn from_sentence(sentence: &Sentence, confidence: f64) -> Self {
        Self {
            text: sentence.text.clone(),
            confidence: confidence * 100.0,
            start_offset: sentence.start_offset,
            end_offset: sentence.end_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8,
    pub excerpts: Vec<Excerpt>,
    pub total_sentences: usize,
    pub detected_sentences: usize,
}

impl AnalysisResult {
    /// `detected_sentences` is always the number of excerpts.
    pub fn from_sentences(total_sentences: usize, excerpts: Vec<Excerpt>) -> Self {
        let detected_sentences = excerpts.len();
        Self {
            score: score(detected_sentences, total_sentences),
            excerpts,
            total_sentences,
            detected_sentences,
        }
    }

    pub fn empty() -> Self {
        Self::from_sentences(0, Vec::new())
    }
}

/// Percentage of detected sentences, rounded half away from zero.
pub fn score(detected: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let ratio = detected.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}
