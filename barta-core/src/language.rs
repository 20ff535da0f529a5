//! Script mixing and currency mentions.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_script::{Script, UnicodeScript};

use crate::urls;

/// Bengali and Assamese share one Unicode script; membership comes from
/// script metadata so combining marks and script-specific punctuation count.
fn is_bengali_script(c: char) -> bool {
    c.script() == Script::Bengali
}

/// Native script and Latin letters in the same message, URLs excluded.
pub fn is_mixed_language(text: &str) -> bool {
    let stripped = urls::strip_explicit(text);
    let has_latin = stripped.chars().any(|c| c.is_ascii_alphabetic());
    has_latin && stripped.chars().any(is_bengali_script)
}

static CURRENCY_SYMBOL_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"₹",
        r"रुपया",
        r"Rs\.?",
        r"INR",
        r"\$",
        r"€",
        r"£",
        r"¥",
        r"dollar",
        r"euro",
        r"rupee",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect()
});

// Native currency words across spelling variants. Substring matching also
// catches suffixed inflections (টাকাৰ, টকাটো, poisar, ...).
static CURRENCY_TERMS: &[&str] = &[
    "টাকা", "টকা", "পয়সা", "পোইসা", "তাকা",
    "পইচা", "পাই", "ধন", "টকীয়া",
    "taka", "toka", "poisa", "paisa",
];

/// Two-stage currency lookup: symbols and abbreviations first, native-script
/// terms second. First hit in either stage decides.
pub fn has_currency(text: &str) -> bool {
    if CURRENCY_SYMBOL_RES.iter().any(|re| re.is_match(text)) {
        return true;
    }
    CURRENCY_TERMS.iter().any(|term| text.contains(term))
}
