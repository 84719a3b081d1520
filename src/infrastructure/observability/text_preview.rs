const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens document text for log output.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    if total_chars <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{visible}... ({total_chars} chars total)")
}
