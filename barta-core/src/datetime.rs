//! Calendar and clock mention detection for English, Bengali and Assamese.
//!
//! Presence detectors only: any single pattern match anywhere in the text
//! fires the flag. No attempt is made to parse an actual date or time.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS_EN_FULL: &str = "January|February|March|April|May|June|July|August|September|October|November|December";
const MONTHS_EN_ABBR: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

// Month names with the spelling/diacritic variants seen in real messages.
const MONTHS_BN: &str = "জান(?:ু|ূ)য়ার(?:ী|ি)|ফেব্র(?:ু|ূ)য়ার(?:ী|ি)|মার্চ|এপ্রিল|মে|জ(?:ু|ূ)ন|জ(?:ু|ূ)লাই|আগস্ট|সেপ্টেম্বর|অক্টোবর|নভেম্বর|ডিসেম্বর";
const MONTHS_AS: &str = "জান(?:ু|ূ)ৱার(?:ী|ি)|ফেব্র(?:ু|ূ)ৱার(?:ী|ি)|মাৰ্চ|এপ্ৰিল|মে|জ(?:ু|ূ)ন|জ(?:ু|ূ)লাই|আগষ্ট|ছেপ্টেম্বৰ|অক্টোবৰ|নৱেম্বৰ|ডিচেম্বৰ";

const WEEKDAYS: &str = "সোমবাৰ|মঙ্গলবাৰ|বুধবাৰ|বৃহস্পতিবাৰ|শুক্ৰবাৰ|শনিবাৰ|ৰবিবাৰ|সোমবার|মঙ্গলবার|বুধবার|বৃহস্পতিবার|শুক্রবার|শনিবার|রবিবার";
const RELATIVE_DAYS: &str = "আজি|আজ|কালি|কাল|গতকালি|গতকাল|পরশু|পৰহি|যোৱা";

// Native decimal digit class.
const ND: &str = "[০-৯]";

static DATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let full = MONTHS_EN_FULL;
    let abbr = MONTHS_EN_ABBR;
    let bn = MONTHS_BN;
    let asm = MONTHS_AS;
    let native = format!("{bn}|{asm}");
    let nd = ND;
    let rel = RELATIVE_DAYS;
    let wd = WEEKDAYS;
    let date_suffix = "(?:তারিখ(?:ে|ের)?|তাৰিখ(?:ে|ৰ|ত)?)";

    let patterns: Vec<String> = vec![
        // Numeric and English calendar forms
        r"\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}".to_string(),
        format!(r"\d{{1,2}}-(?:{abbr})-\d{{2}}"),
        format!(r"\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{abbr})\.?"),
        format!(r"\d{{1,2}}\s+(?:{full})\s+\d{{2,4}}"),
        format!(r"\d{{1,2}}\s+(?:{abbr})\s+\d{{2,4}}"),
        format!(r"(?:{full})\s+\d{{1,2}},?\s+\d{{2,4}}"),
        format!(r"(?:{abbr})\s+\d{{1,2}},?\s+\d{{2,4}}"),
        // Bengali / Assamese day-month-year and month-day-year
        format!(r"\d{{1,2}}\s+(?:{bn})(?:\w{{0,3}})?,?\s+\d{{2,4}}"),
        format!(r"\d{{1,2}}\s+(?:{asm})(?:\w{{0,3}})?,?\s+\d{{2,4}}"),
        format!(r"(?:{bn})(?:\w{{0,3}})?\s+\d{{1,2}},?\s+\d{{2,4}}"),
        format!(r"(?:{asm})(?:\w{{0,3}})?\s+\d{{1,2}},?\s+\d{{2,4}}"),
        // Year mentions
        r"\d{4}\s*সাল".to_string(),
        r"\d{4}\s*(?:year|বছর|বৰ্ষ)".to_string(),
        // Native-digit forms and date-suffix words
        format!(r"{nd}{{1,2}}\s+(?:{native}),?\s+{nd}{{2,4}}"),
        format!(r"{nd}{{1,2}}\s+(?:{native})(?:ৰ)?\s+আগত"),
        format!(r"\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{abbr})\.?\s+তাৰিখে"),
        format!(r"\d{{1,2}}\s+(?:{native}),?\s+\d{{2,4}}\s+{date_suffix}"),
        format!(r"{nd}{{1,2}}\s+(?:{native}),?\s+{nd}{{2,4}}\s+{date_suffix}"),
        format!(r"(?:{rel})\s+{nd}{{1,2}}(?:ই|ৰ|র)?\s+(?:{native})"),
        format!(r"{nd}{{1,2}}\s+(?:{native}),?\s+{nd}{{2,4}}\s+দিন(?:ত|ে)?"),
        format!(r"(?:{native})\s+মা(?:স|হ)"),
        format!(r"(?:{rel})\s+(?:{native}),?\s+{nd}{{1,4}}"),
        format!(r"{nd}{{1,2}}\s+(?:{native})(?:ত)?"),
        format!(r"{nd}{{1,2}}\s+(?:{native}).*?{nd}{{4}}"),
        // Relative-day, weekday and promotional deadline phrases
        format!(r"(?:{rel})\s+{nd}{{1,2}}\s+দিন(?:ত)?"),
        format!(r"(?:গত|বিগত|যোৱা|আহিবলগীয়া)\s+(?:সপ্তাহ(?:ত)?|{wd})"),
        format!(r"(?:{wd})\s+{nd}{{1,2}}\s+(?:{native})"),
        format!(r"{nd}{{1,2}}\s+(?:{native})(?:ৰ)?\s+(?:আগত|পূৰ্বে)"),
        format!(r"অফাৰ\s+শেষ\s+হ'ব\s+{nd}{{1,2}}\s+(?:{native})"),
        r"উৎসৱমুখৰ\s+ছুটিৰ\s+দিনটো".to_string(),
        r"(?:আগত|পূৰ্বে)\s+এমাহৰ\s+বাবে".to_string(),
    ];

    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
});

/// Any calendar-date mention in any supported script.
pub fn has_date(text: &str) -> bool {
    DATE_RES.iter().any(|re| re.is_match(text))
}

const TIME_OF_DAY: &str = "সকাল|ভোর|রাত|বিকাল|সন্ধ্যা|দুপুর|ৰাতি|পুৱা|গধূলি|আবেলি|নিশা|দুপৰীয়া";

// Numeral + unit/time-of-day words; each combines with a native digit run.
static TIME_UNIT_WORDS: &[&str] = &[
    "সকাল", "ভোর", "রাত", "বিকাল", "সন্ধ্যা", "দুপুর",
    "ৰাতি", "পুৱা", "গধূলি", "আবেলি", "নিশা", "দুপৰীয়া",
    "টা", "বাজে", "ঘণ্টা", "মিনিট", "সেকেন্ড",
    "বজি", "বাজি", "ছেকেণ্ড",
];

static TIME_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let nd = ND;
    let tod = TIME_OF_DAY;

    let mut patterns: Vec<String> = vec![
        // 12-hour clock with meridiem
        r"(?i)\b(?:[0-9]|0[0-9]|1[0-2])(?::[0-5][0-9])?(?::[0-5][0-9])?\s*[AaPp][Mm]\b".into(),
        r"(?i)\b(?:[0-9]|0[0-9]|1[0-2])(?:\.|\s)[0-5][0-9](?:\s*|\.)[AaPp]\.?[Mm]\.?\b".into(),
        // 24-hour clock
        r"\b(?:[01]?[0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?\b".into(),
        r"(?i)\b(?:noon|midnight|midday)\b".into(),
        r"(?i)\b(?:[0-9]|0[0-9]|1[0-2])\s+o'?clock\b".into(),
        r"(?i)\b(?:half|quarter)\s+(?:past|to)\s+(?:[0-9]|0[0-9]|1[0-2])\b".into(),
        r"(?i)\bat\s+(?:[0-9]|0[0-9]|1[0-2])(?:\s+|:)(?:[0-5][0-9])?\s*(?:[AaPp][Mm])?\b".into(),
        // Native digital clock, Bengali separators included
        format!(r"{nd}{{1,2}}(?:[:.।]|\s*ঃ|\s+){nd}{{1,2}}(?:[:.।]|\s*ঃ|\s+)?{nd}{{0,2}}"),
        format!(r"{nd}{{1,2}}\s*(?:টা|বাজে|ঘণ্টা|घंटा)"),
        // Time-of-day phrases
        format!(r"(?i)(?:এখন|বর্তমান|এতিয়া)\s+{nd}{{1,2}}\s*(?:টা|বাজে|ঘণ্টা|বজি)"),
        format!(r"(?i)(?:{tod})\s+{nd}{{1,2}}"),
        format!(r"(?i){nd}{{1,2}}\s*(?:টা|বাজে|ঘণ্টা)\s*(?:ও|আৰু|এবং)?\s*{nd}{{1,2}}\s*মিনিট"),
        format!(r"(?i)(?:ভোরে|ভোৰত|সকালে|সকালত|রাতে|ৰাতিত)\s+{nd}{{1,2}}"),
        format!(r"(?i){nd}{{1,2}}(?:[:.।]|\s*ঃ|\s+){nd}{{1,2}}\s*(?:এএম|পিএম|am|pm|a\.m\.|p\.m\.)"),
    ];

    for word in TIME_UNIT_WORDS {
        patterns.push(format!(r"{nd}{{1,2}}\s*{word}"));
    }

    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
});

/// Any clock-time mention in any supported script.
pub fn has_time(text: &str) -> bool {
    TIME_RES.iter().any(|re| re.is_match(text))
}
