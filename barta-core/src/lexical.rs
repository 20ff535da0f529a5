//! Character-level cues — punctuation, casing, emoji and repetition.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::urls;

// ASCII punctuation minus the marks common in ordinary messages: the
// question mark, comma and full stop stay out (the ₹ sign is not ASCII and
// never enters the set).
const SPECIAL_CHARS: &str = "!\"#$%&'()*+-/:;<=>@[\\]^_`{|}~";

/// Any special punctuation outside URL spans.
pub fn has_special_chars(text: &str) -> bool {
    let stripped = urls::strip_all(text);
    stripped.chars().any(|c| SPECIAL_CHARS.contains(c))
}

static LATIN_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// Shouting cue: any Latin run longer than one letter in full upper case.
/// Bengali and Assamese have no case distinction, so the check is
/// Latin-only.
pub fn has_all_caps_words(text: &str) -> bool {
    LATIN_WORD_RE
        .find_iter(text)
        .any(|m| m.as_str().len() > 1 && m.as_str().chars().all(|c| c.is_ascii_uppercase()))
}

fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F600}'..='\u{1F64F}'   // emoticons
        | '\u{1F300}'..='\u{1F5FF}' // symbols & pictographs
        | '\u{1F680}'..='\u{1F6FF}' // transport & map
        | '\u{1F700}'..='\u{1F77F}'
        | '\u{1F780}'..='\u{1F7FF}'
        | '\u{1F800}'..='\u{1F8FF}'
        | '\u{1F900}'..='\u{1F9FF}' // supplemental symbols & pictographs
        | '\u{1FA00}'..='\u{1FA6F}'
        | '\u{1FA70}'..='\u{1FAFF}' // symbols & pictographs extended
        | '\u{2702}'..='\u{27B0}'   // dingbats
        | '\u{24C2}'..='\u{257F}'   // enclosed characters span
        | '\u{2600}'..='\u{26FF}'   // miscellaneous symbols
        | '\u{2700}'..='\u{27BF}'
        | '\u{FE0F}'                // emoji variation selector
        | '\u{1F1E0}'..='\u{1F1FF}' // regional indicators
    )
}

/// Any code point inside the emoji block ranges.
pub fn has_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

// Keep word characters, whitespace and the Bengali block; drop the rest.
static TOKEN_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\x{0980}-\x{09FF}]").unwrap());

/// Any token occurring more than once anywhere in the message, not just
/// immediate repetition.
pub fn has_repeated_words(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let cleaned = TOKEN_STRIP_RE.replace_all(&lowered, "");
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        let seen = counts.entry(token).or_insert(0);
        *seen += 1;
        if *seen > 1 {
            return true;
        }
    }
    false
}

// The one backreference in the engine: a punctuation character from the
// fixed set immediately repeated.
static CONSECUTIVE_SPECIAL_RE: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(r"([\?\!\@\#\$\%\&\*\(\)\-\_\=\+\[\]\{\}\;\:\,\.\<\>\/\\\|])\1+")
        .unwrap()
});

/// Emphatic punctuation runs ("!!!", "???") outside URL spans.
pub fn has_consecutive_special_chars(text: &str) -> bool {
    let stripped = urls::strip_all(text);
    CONSECUTIVE_SPECIAL_RE.is_match(&stripped).unwrap_or(false)
}
