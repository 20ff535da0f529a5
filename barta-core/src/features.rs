//! Fixed-schema feature vector assembly.

use tracing::debug;

use crate::{codes, datetime, language, lexical, metrics, phone, urls};

/// Published schema. The classifier was trained against this exact order;
/// changing it requires a version bump.
pub const FEATURE_COLUMNS: [&str; 17] = [
    "has_phone_number",
    "has_special_chars",
    "has_all_caps_words",
    "has_url",
    "has_short_url",
    "has_regular_url",
    "is_mixed_language",
    "has_currency",
    "has_date",
    "has_time",
    "has_id_code",
    "has_emoji",
    "has_repeated_words",
    "has_consecutive_special_chars",
    "has_subscriber_code",
    "avg_word_length",
    "char_count_no_spaces",
];

pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Extract the 17-element feature vector in schema order.
///
/// Total over all inputs: every detector degrades to 0 (or 0.0 for the
/// average) instead of failing, so the vector is always fully populated.
pub fn extract_features(text: &str) -> [f64; FEATURE_COUNT] {
    let url_features = urls::classify(text);

    let vector = [
        flag(phone::has_phone_number(text)),
        flag(lexical::has_special_chars(text)),
        flag(lexical::has_all_caps_words(text)),
        flag(url_features.has_url),
        flag(url_features.has_short_url),
        flag(url_features.has_regular_url),
        flag(language::is_mixed_language(text)),
        flag(language::has_currency(text)),
        flag(datetime::has_date(text)),
        flag(datetime::has_time(text)),
        flag(codes::has_id_code(text)),
        flag(lexical::has_emoji(text)),
        flag(lexical::has_repeated_words(text)),
        flag(lexical::has_consecutive_special_chars(text)),
        flag(codes::has_subscriber_code(text)),
        metrics::avg_word_length(text),
        metrics::char_count_no_spaces(text) as f64,
    ];

    debug!(chars = text.len(), "feature vector assembled");
    vector
}

/// Batch helper for training-time extraction; output order follows input
/// order. Callers that need parallelism fan out externally — each call is
/// independent.
pub fn extract_features_batch(texts: &[String]) -> Vec<[f64; FEATURE_COUNT]> {
    texts.iter().map(|t| extract_features(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAS_PHONE_NUMBER: usize = 0;
    const HAS_SPECIAL_CHARS: usize = 1;
    const HAS_URL: usize = 3;
    const HAS_SHORT_URL: usize = 4;
    const HAS_REGULAR_URL: usize = 5;
    const IS_MIXED_LANGUAGE: usize = 6;
    const HAS_EMOJI: usize = 11;
    const HAS_REPEATED_WORDS: usize = 12;
    const HAS_CONSECUTIVE_SPECIAL_CHARS: usize = 13;
    const AVG_WORD_LENGTH: usize = 15;
    const CHAR_COUNT_NO_SPACES: usize = 16;

    fn assert_well_formed(vector: &[f64; FEATURE_COUNT]) {
        for (i, value) in vector.iter().enumerate() {
            assert!(value.is_finite(), "feature {i} is not finite");
            if i < AVG_WORD_LENGTH {
                assert!(
                    *value == 0.0 || *value == 1.0,
                    "feature {i} is not boolean-coded: {value}"
                );
            } else {
                assert!(*value >= 0.0, "feature {i} is negative: {value}");
            }
        }
    }

    #[test]
    fn test_totality_over_awkward_inputs() {
        let inputs = [
            "",
            " ",
            "\t\n",
            "?",
            "😀😀😀",
            "টাকা জিতুন এখনই https://bit.ly/x *121# 9876543210 !!!",
            "a̐ b̃ মিশ্র লিপি mixed",
        ];
        for input in inputs {
            assert_well_formed(&extract_features(input));
        }
    }

    #[test]
    fn test_determinism() {
        let text = "WIN ৫০০ টাকা!! call 9876543210 before 5 PM, bit.ly/win";
        assert_eq!(extract_features(text), extract_features(text));
    }

    #[test]
    fn test_empty_input() {
        let vector = extract_features("");
        assert_eq!(vector, [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_url_punctuation_excluded() {
        let vector = extract_features("https://example.com/!!!");
        assert_eq!(vector[HAS_SPECIAL_CHARS], 0.0);
        assert_eq!(vector[HAS_CONSECUTIVE_SPECIAL_CHARS], 0.0);
        assert_eq!(vector[HAS_URL], 1.0);
        assert_eq!(vector[HAS_REGULAR_URL], 1.0);
        assert_eq!(vector[HAS_SHORT_URL], 0.0);
    }

    #[test]
    fn test_short_url_priority() {
        let vector = extract_features("check http://bit.ly/abc");
        assert_eq!(vector[HAS_URL], 1.0);
        assert_eq!(vector[HAS_SHORT_URL], 1.0);
        assert_eq!(vector[HAS_REGULAR_URL], 0.0);
    }

    #[test]
    fn test_phone_number_floor() {
        assert_eq!(extract_features("call 123")[HAS_PHONE_NUMBER], 0.0);
        assert_eq!(extract_features("call 9876543210")[HAS_PHONE_NUMBER], 1.0);
    }

    #[test]
    fn test_mixed_language() {
        assert_eq!(extract_features("Hello বন্ধু")[IS_MIXED_LANGUAGE], 1.0);
        assert_eq!(extract_features("শুভ সকাল")[IS_MIXED_LANGUAGE], 0.0);
    }

    #[test]
    fn test_repeated_words() {
        assert_eq!(extract_features("test test done")[HAS_REPEATED_WORDS], 1.0);
        assert_eq!(extract_features("one two three")[HAS_REPEATED_WORDS], 0.0);
    }

    #[test]
    fn test_emoji() {
        assert_eq!(extract_features("hello 😀")[HAS_EMOJI], 1.0);
        assert_eq!(extract_features("hello")[HAS_EMOJI], 0.0);
    }

    #[test]
    fn test_aggregates() {
        let vector = extract_features("hello world");
        assert_eq!(vector[AVG_WORD_LENGTH], 5.0);
        assert_eq!(vector[CHAR_COUNT_NO_SPACES], 10.0);
    }

    #[test]
    fn test_schema() {
        assert_eq!(FEATURE_COLUMNS.len(), 17);
        assert_eq!(FEATURE_COLUMNS[0], "has_phone_number");
        assert_eq!(FEATURE_COLUMNS[8], "has_date");
        assert_eq!(FEATURE_COLUMNS[15], "avg_word_length");
        assert_eq!(FEATURE_COLUMNS[16], "char_count_no_spaces");
    }

    #[test]
    fn test_batch_preserves_order() {
        let texts = vec!["hello 😀".to_string(), "hello".to_string()];
        let vectors = extract_features_batch(&texts);
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0][HAS_EMOJI], 1.0);
        assert_eq!(vectors[1][HAS_EMOJI], 0.0);
    }
}
