use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static BLOCK_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(p|h[1-6]|li|div|tr)\s*>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static EXCESS_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strips HTML markup down to plain text. Block elements end a paragraph,
/// `<br>` becomes a newline and the common character entities are decoded.
pub fn strip_markup(html: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(html, "\n");
    let with_paragraphs = BLOCK_END.replace_all(&with_breaks, "\n\n");
    let without_tags = TAG.replace_all(&with_paragraphs, "");
    let decoded = decode_entities(&without_tags);

    let lines: Vec<&str> = decoded.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");

    EXCESS_BLANK_LINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
