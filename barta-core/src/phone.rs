//! Phone number detection — layered numeric patterns across scripts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::digits;

// Latin-digit forms, most to least specific. Each is probed against the raw
// text and against the digit-normalized view.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?\d{2}\s*\d{10}",
        r"\d{10,11}",
        r"\+?\d{1,4}[-\s]?\d{2,4}[-\s]?\d{2,4}[-\s]?\d{2,4}",
        r"\b\d{5,9}\b",
        r"\b\d{2,5}[-\s]\d{3,5}\b",
        r"\(\d{2,4}\)[-\s]?\d{3,6}\b",
        r"\b0\d{2,4}[-\s]?\d{3,6}\b",
        r"\d{3,4}\s+\d{2}\s+\d{5}",
        r"\(\d{3,4}\)\s*\d{6,8}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Mixed native/Latin digit forms, probed against the raw text only.
static MIXED_PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?[০-৯\d]{2}\s*[০-৯\d]{10}",
        r"[০-৯\d]{3,5}[-\s]?[০-৯\d]{6,7}",
        r"[০-৯\d]{10,11}",
        r"\b[০-৯\d]{5,9}\b",
        r"\b[০-৯\d]{2,5}[-\s][০-৯\d]{3,5}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Digits left once separators are stripped and native numerals normalized.
fn digit_count(candidate: &str) -> usize {
    digits::to_latin_digits(candidate)
        .chars()
        .filter(char::is_ascii_digit)
        .count()
}

/// Detect a phone-number-like token. A candidate needs at least 5 digits
/// after separator stripping, so prices and small counts do not fire.
pub fn has_phone_number(text: &str) -> bool {
    let converted = digits::to_latin_digits(text);

    for re in PHONE_RES.iter() {
        if let Some(m) = re.find(text).or_else(|| re.find(&converted)) {
            if digit_count(m.as_str()) >= 5 {
                return true;
            }
        }
    }

    for re in MIXED_PHONE_RES.iter() {
        if let Some(m) = re.find(text) {
            if digit_count(m.as_str()) >= 5 {
                return true;
            }
        }
    }

    false
}
