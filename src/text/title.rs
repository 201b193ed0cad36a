use once_cell::sync::Lazy;
use regex::Regex;

use super::util::{char_len, char_offset, strip_list_marker, take_chars, title_case};

/// Default maximum title length, in characters.
pub const DEFAULT_TITLE_LENGTH: usize = 60;

/// Title returned for empty input.
pub const UNTITLED_TASK: &str = "Untitled Task";

/// A break must sit past this character index to produce a title.
const MIN_BREAK_INDEX: usize = 15;

/// Longest action clause kept by the subject/action strategy.
const ACTION_LENGTH: usize = 40;

/// Natural break points, tried in order. Matched ASCII case-insensitively.
const BREAK_POINTS: &[&str] = &[", ", " - ", ": ", "; ", " so that ", " in order to "];

/// `X need/want/... [to] Y` and `We need/... [to] Y`. Only captures that
/// name both a subject and an action produce a candidate.
static ACTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(?:the\s+)?(?P<subject>\w+(?:\s+\w+)?)\s+(?:need|want|should|must|can|will)\s+(?:to\s+)?(?P<action>.+)",
        r"(?i)^(?:we\s+)?(?:need|want|should|must)\s+(?:to\s+)?(?P<action>.+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("action pattern compiles"))
    .collect()
});

/// One rung of the title ladder: `Some(title)` accepts, `None` falls through.
type Strategy = fn(&str, usize) -> Option<String>;

const LADDER: &[Strategy] = &[subject_action, sentence_boundary, break_point, word_boundary];

/// Shorten `text` to a title of at most `max_length` characters without
/// cutting words in half.
///
/// Leading ordinals (`1.`) and bullets (`-`, `*`, `•`) are removed first.
/// Text that already fits is returned unchanged. Longer text goes through
/// the ladder: a `Subject - action` rewrite, the first sentence, the last
/// natural break point, the last word boundary, and finally a hard cut
/// that backs up to a space when it would split a word.
///
/// With `max_length <= 15` the sentence, break point and word boundary
/// rungs can never accept, so titles come from the rewrite or the hard cut.
pub fn short_title(text: &str, max_length: usize) -> String {
    let text = strip_list_marker(text);
    if text.is_empty() {
        return UNTITLED_TASK.to_string();
    }

    if char_len(text) <= max_length {
        return text.to_string();
    }

    LADDER
        .iter()
        .find_map(|strategy| strategy(text, max_length))
        .unwrap_or_else(|| hard_truncate(text, max_length))
}

fn subject_action(text: &str, max_length: usize) -> Option<String> {
    ACTION_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let subject = caps.name("subject")?.as_str();
        let action = clip_action(caps.name("action")?.as_str());
        let title = format!("{} - {}", title_case(subject), action);
        if char_len(&title) <= max_length {
            Some(title.trim().to_string())
        } else {
            None
        }
    })
}

/// Keep the action within `ACTION_LENGTH` characters, dropping the partial
/// last word.
fn clip_action(action: &str) -> &str {
    if char_len(action) <= ACTION_LENGTH {
        return action;
    }
    let head = take_chars(action, ACTION_LENGTH);
    match head.rfind(' ') {
        Some(pos) => &head[..pos],
        None => head,
    }
}

/// The first `. ` in the window that does not follow a digit.
fn sentence_boundary(text: &str, max_length: usize) -> Option<String> {
    let window: Vec<char> = take_chars(text, max_length).chars().collect();
    let period = (0..window.len().saturating_sub(1)).find(|&i| {
        window[i] == '.'
            && window[i + 1].is_whitespace()
            && (i == 0 || !window[i - 1].is_ascii_digit())
    })?;

    if period > MIN_BREAK_INDEX {
        Some(take_chars(text, period).trim().to_string())
    } else {
        None
    }
}

fn break_point(text: &str, max_length: usize) -> Option<String> {
    let window = take_chars(text, max_length);
    BREAK_POINTS.iter().find_map(|pattern| {
        let idx = char_offset(window, rfind_ignore_ascii_case(window, pattern)?);
        if idx > MIN_BREAK_INDEX {
            Some(take_chars(text, idx).trim().to_string())
        } else {
            None
        }
    })
}

/// Byte offset of the last match of the ASCII `needle` in `haystack`.
fn rfind_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let (hay, needle) = (haystack.as_bytes(), needle.as_bytes());
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len())
        .rev()
        .find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

fn word_boundary(text: &str, max_length: usize) -> Option<String> {
    let window = take_chars(text, max_length);
    let idx = char_offset(window, window.rfind(' ')?);
    if idx > MIN_BREAK_INDEX {
        Some(take_chars(text, idx).trim().to_string())
    } else {
        None
    }
}

fn hard_truncate(text: &str, max_length: usize) -> String {
    let mut truncated = take_chars(text, max_length);
    let splits_word = text[truncated.len()..]
        .chars()
        .next()
        .map_or(false, |next| next != ' ');

    if splits_word {
        if let Some(pos) = truncated.rfind(' ') {
            if pos > 0 {
                truncated = &truncated[..pos];
            }
        }
    }

    truncated.trim().to_string()
}
