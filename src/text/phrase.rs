use once_cell::sync::Lazy;
use regex::Regex;

use super::util::{char_len, strip_list_marker, title_case};

/// Phrase returned when the text has no words at all.
pub const UNTITLED: &str = "Untitled";

/// Words kept by the leading-word fallback.
const FALLBACK_WORDS: usize = 6;

/// Requirement phrasings, highest priority first. Each captures the object
/// lazily up to a purpose clause or the end of the text.
static PHRASE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "users need password reset"
        r"(?:need|want|require)s?\s+(?:a\s+|the\s+)?(.+?)(?:\s+so\s+that|\s+in\s+order\s+to|$)",
        // "implement two-factor authentication"
        r"(?:implement|create|build|add|develop)\s+(?:a\s+|the\s+)?(.+?)(?:\s+so\s+that|\s+in\s+order\s+to|$)",
        // "ability to view all users"
        r"ability\s+to\s+(.+?)(?:\s+so\s+that|\s+in\s+order\s+to|$)",
        // "be able to reset password"
        r"be\s+able\s+to\s+(.+?)(?:\s+so\s+that|\s+in\s+order\s+to|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("phrase pattern compiles"))
    .collect()
});

/// Pull the feature being asked for out of a requirement sentence, as a
/// title-cased phrase.
///
/// The first pattern whose capture is longer than 5 and shorter than 60
/// characters wins. Without a usable capture, the first six words of the
/// text are title-cased instead.
pub fn key_phrase(text: &str) -> String {
    let text = strip_list_marker(text);
    let lowered = text.to_lowercase();

    PHRASE_PATTERNS
        .iter()
        .find_map(|pattern| {
            let phrase = pattern.captures(&lowered)?.get(1)?.as_str().trim();
            let len = char_len(phrase);
            if len > 5 && len < 60 {
                Some(title_case(phrase))
            } else {
                None
            }
        })
        .unwrap_or_else(|| leading_words(text))
}

fn leading_words(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().take(FALLBACK_WORDS).collect();
    if words.is_empty() {
        UNTITLED.to_string()
    } else {
        title_case(&words.join(" "))
    }
}
