//! Whole-message numeric aggregates.

use once_cell::sync::Lazy;
use regex::Regex;

// Same keep-set as the repeated-word tokenizer, but applied to the
// original-case text.
static WORD_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\x{0980}-\x{09FF}]").unwrap());

/// Mean token length in characters after punctuation stripping, rounded to
/// two decimals. Empty and whitespace-only input yield 0.0.
pub fn avg_word_length(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let cleaned = WORD_STRIP_RE.replace_all(text, "");
    let mut words = 0usize;
    let mut total_chars = 0usize;
    for token in cleaned.split_whitespace() {
        words += 1;
        total_chars += token.chars().count();
    }

    if words == 0 {
        return 0.0;
    }
    let mean = total_chars as f64 / words as f64;
    (mean * 100.0).round() / 100.0
}

/// Count of characters that are not the ASCII space, on the raw text.
pub fn char_count_no_spaces(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}
