//! URL detection — shortener vs regular classification, plus the
//! URL-stripped text views the punctuation and language detectors consume.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Known link-shortener hosts, tested before any generic pattern.
static SHORTENER_DOMAINS: &[&str] = &["bit.ly", "goo.gl", "tinyurl.com", "t.co"];

static SHORT_URL_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"bit\.ly/\S+",
        r"goo\.gl/\S+",
        r"tinyurl\.com/\S+",
        r"t\.co/\S+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static REGULAR_URL_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"https?://(?:[-\w.]|(?:%[\da-fA-F]{2}))+",
        r"www\.(?:[-\w.]|(?:%[\da-fA-F]{2}))+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Broad view: scheme URLs, www hosts and bare host.tld tokens all go.
static STRIP_ALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[^\s]+|www\.[^\s]+|[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}[^\s]*").unwrap()
});

// Narrow view: only explicit scheme/www URLs go, bare domains stay.
static STRIP_EXPLICIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());

/// URL presence flags in schema terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlFeatures {
    pub has_url: bool,
    pub has_short_url: bool,
    pub has_regular_url: bool,
}

/// Does this candidate end in (or route through) a shortener host?
///
/// The generic URL pattern stops at the path separator, so the matched text
/// for `http://bit.ly/abc` is `http://bit.ly` — the host has to be checked
/// on its own, boundary-aware, instead of re-running the path-bearing
/// shortener patterns.
fn is_shortener_host(candidate: &str) -> bool {
    SHORTENER_DOMAINS.iter().any(|domain| {
        candidate.rfind(domain).is_some_and(|pos| {
            let end = pos + domain.len();
            let head_ok = pos == 0 || matches!(candidate.as_bytes()[pos - 1], b'.' | b'/');
            let tail_ok = end == candidate.len() || candidate[end..].starts_with('/');
            head_ok && tail_ok
        })
    })
}

/// Classify URL presence. Shortener patterns take priority; a generic match
/// that routes through the shortener already credited as short does not
/// additionally set `has_regular_url`. A path-less shortener link never set
/// the short flag, so it still counts as a regular URL. Only the first
/// match per pattern class matters.
pub fn classify(text: &str) -> UrlFeatures {
    let mut features = UrlFeatures::default();

    for re in SHORT_URL_RES.iter() {
        if re.is_match(text) {
            features.has_short_url = true;
            break;
        }
    }

    for re in REGULAR_URL_RES.iter() {
        if let Some(m) = re.find(text) {
            let already_counted = features.has_short_url && is_shortener_host(m.as_str());
            if !already_counted {
                features.has_regular_url = true;
            }
            break;
        }
    }

    features.has_url = features.has_short_url || features.has_regular_url;
    debug!(?features, "url classification");
    features
}

/// Text with every URL-looking span removed, bare domains included.
pub fn strip_all(text: &str) -> String {
    STRIP_ALL_RE.replace_all(text, "").into_owned()
}

/// Text with explicit scheme/`www.` URLs removed.
pub fn strip_explicit(text: &str) -> String {
    STRIP_EXPLICIT_RE.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_url() {
        let f = classify("see https://example.com/page for details");
        assert!(f.has_url);
        assert!(!f.has_short_url);
        assert!(f.has_regular_url);
    }

    #[test]
    fn test_short_url_not_double_counted() {
        let f = classify("check http://bit.ly/abc");
        assert!(f.has_url);
        assert!(f.has_short_url);
        assert!(!f.has_regular_url);
    }

    #[test]
    fn test_bare_short_url() {
        let f = classify("tinyurl.com/deal50 for the offer");
        assert!(f.has_url);
        assert!(f.has_short_url);
        assert!(!f.has_regular_url);
    }

    #[test]
    fn test_www_url() {
        let f = classify("visit www.shop-bd.com today");
        assert!(f.has_url);
        assert!(f.has_regular_url);
    }

    #[test]
    fn test_no_url() {
        assert_eq!(classify("plain message, no links"), UrlFeatures::default());
    }

    #[test]
    fn test_pathless_shortener_counts_as_regular() {
        // No path means the shortener pattern never fired, so the link is
        // still a URL — credited as regular.
        let f = classify("https://t.co");
        assert!(f.has_url);
        assert!(!f.has_short_url);
        assert!(f.has_regular_url);
    }

    #[test]
    fn test_shortener_host_boundaries() {
        assert!(is_shortener_host("http://bit.ly"));
        assert!(is_shortener_host("https://m.t.co"));
        // "best.com" contains "t.co" as a substring but is not that host
        assert!(!is_shortener_host("https://best.com"));
        assert!(!is_shortener_host("http://habit.ly"));
    }

    #[test]
    fn test_strip_all_removes_bare_domains() {
        assert_eq!(strip_all("go to example.com/!!! now"), "go to  now");
    }

    #[test]
    fn test_strip_explicit_keeps_bare_domains() {
        assert_eq!(
            strip_explicit("go to example.com now, not https://other.org"),
            "go to example.com now, not "
        );
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_all(""), "");
        assert_eq!(strip_explicit(""), "");
    }
}
