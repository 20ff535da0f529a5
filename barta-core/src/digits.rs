//! Native digit normalization — Bengali/Assamese numerals to Latin.

static DIGIT_MAP: &[(char, char)] = &[
    ('০', '0'),
    ('১', '1'),
    ('২', '2'),
    ('৩', '3'),
    ('৪', '4'),
    ('৫', '5'),
    ('৬', '6'),
    ('৭', '7'),
    ('৮', '8'),
    ('৯', '9'),
];

/// Replace Bengali/Assamese decimal digits with Latin `0`-`9`, one to one.
/// Every other character passes through unchanged.
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            DIGIT_MAP
                .iter()
                .find(|(native, _)| *native == c)
                .map(|(_, latin)| *latin)
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_bengali_digits() {
        assert_eq!(to_latin_digits("০১২৩৪৫৬৭৮৯"), "0123456789");
    }

    #[test]
    fn test_leaves_other_text_untouched() {
        assert_eq!(to_latin_digits("ফোন ৮৮০১ করুন"), "ফোন 8801 করুন");
    }

    #[test]
    fn test_latin_passthrough() {
        assert_eq!(to_latin_digits("call 555 now"), "call 555 now");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_latin_digits(""), "");
    }
}
