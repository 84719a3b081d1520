use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::application::ports::SentenceSegmenter;
use crate::domain::{MIN_SENTENCE_CHARS, Sentence};

/// A run of non-terminal characters followed by one or more of `.`, `!`, `?`.
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// How a sentence's offsets are located in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetStrategy {
    /// First occurrence of the trimmed sentence, searching from the start of the text.
    /// Repeated phrasing maps every copy to the earliest one.
    #[default]
    FirstOccurrence,
    /// Position recorded while scanning, so repeated phrasing keeps its true location.
    Cursor,
}

pub struct PunctuationSegmenter {
    offset_strategy: OffsetStrategy,
}

impl Default for PunctuationSegmenter {
    fn default() -> Self {
        Self::new(OffsetStrategy::default())
    }
}

impl PunctuationSegmenter {
    pub fn new(offset_strategy: OffsetStrategy) -> Self {
        Self { offset_strategy }
    }

    fn locate(&self, text: &str, candidate_start: usize, raw: &str, trimmed: &str) -> usize {
        let leading_whitespace = raw.len() - raw.trim_start().len();
        let scanned_start = candidate_start + leading_whitespace;

        match self.offset_strategy {
            OffsetStrategy::Cursor => scanned_start,
            OffsetStrategy::FirstOccurrence => text.find(trimmed).unwrap_or(scanned_start),
        }
    }
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        SENTENCE
            .find_iter(text)
            .filter_map(|candidate| {
                let raw = candidate.as_str();
                let trimmed = raw.trim();

                if trimmed.chars().count() < MIN_SENTENCE_CHARS {
                    return None;
                }

                let start = self.locate(text, candidate.start(), raw, trimmed);
                Some(Sentence::new(trimmed.to_string(), start))
            })
            .collect()
    }
}
