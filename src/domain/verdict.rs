/// Flagged verdicts must exceed this confidence to produce an excerpt.
pub const FLAG_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictLabel {
    Benign,
    Flagged,
}

impl VerdictLabel {
    /// Maps the classifier's numeric class; only `1` denotes flagged content.
    /// The class arrives as any JSON number, so `1.0` counts as well.
    pub fn from_class(class: f64) -> Self {
        if class == 1.0 {
            Self::Flagged
        } else {
            Self::Benign
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationVerdict {
    pub label: VerdictLabel,
    pub confidence: f64,
}

impl ClassificationVerdict {
    pub fn new(label: VerdictLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    pub fn is_detection(&self) -> bool {
        self.label == VerdictLabel::Flagged && self.confidence > FLAG_THRESHOLD
    }
}
