use serde::Serialize;

/// Sentences shorter than this (in characters, after trimming) are never emitted.
pub const MIN_SENTENCE_CHARS: usize = 5;

/// A trimmed sentence and its half-open byte range `[start_offset, end_offset)`
/// in the text it was segmented from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Sentence {
    pub fn new(text: String, start_offset: usize) -> Self {
        let end_offset = start_offset + text.len();
        Self {
            text,
            start_offset,
            end_offset,
        }
    }
}
