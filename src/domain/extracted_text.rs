/// Plain text produced from a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub success: bool,
}

impl ExtractedText {
    pub fn new(text: String) -> Self {
        let success = !text.trim().is_empty();
        Self { text, success }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
