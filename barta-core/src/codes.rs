//! Reference-code detection — tracking IDs, version tokens, carrier
//! shortcodes and USSD service-menu sequences.

use once_cell::sync::Lazy;
use regex::Regex;

// Long digit run, possibly embedded in an alphanumeric token.
static LONG_DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w*\d{10,}\w*\b").unwrap());

// Dotted version-like token: letters, digits, then dotted digit groups.
static VERSION_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z]+\d+\.\d+\.\d+\b").unwrap());

/// Tracking numbers, reference codes and version-style identifiers.
pub fn has_id_code(text: &str) -> bool {
    LONG_DIGIT_RUN_RE.is_match(text) || VERSION_TOKEN_RE.is_match(text)
}

static PAREN_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
static SHORT_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4,5}").unwrap());
static BARE_SHORT_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4,5}\b").unwrap());
static USSD_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\d+(?:\*\d+)*#").unwrap());
static USSD_HASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\d+(?:\*\d+)*#?").unwrap());
static WORD_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z]+\s+\d+\b").unwrap());

/// Carrier shortcodes and service-menu codes: a parenthesized group holding
/// a 4-5 digit run or a `*`/`#`, a bare 4-5 digit token, a USSD sequence,
/// or a word followed by a number.
pub fn has_subscriber_code(text: &str) -> bool {
    for cap in PAREN_GROUP_RE.captures_iter(text) {
        let inner = cap.get(1).map(|m| m.as_str()).unwrap_or("");
        if SHORT_CODE_RE.is_match(inner) || inner.contains('*') || inner.contains('#') {
            return true;
        }
    }

    BARE_SHORT_CODE_RE.is_match(text)
        || USSD_STAR_RE.is_match(text)
        || USSD_HASH_RE.is_match(text)
        || WORD_NUMBER_RE.is_match(text)
}
