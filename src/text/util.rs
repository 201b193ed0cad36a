use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("ordinal pattern compiles"));
static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]\s*").expect("bullet pattern compiles"));

/// Number of characters (not bytes) in a string.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The prefix holding the first `n` characters of `s`.
pub(crate) fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte_pos, _)) => &s[..byte_pos],
        None => s,
    }
}

/// Character index of a byte position that sits on a char boundary.
pub(super) fn char_offset(s: &str, byte_pos: usize) -> usize {
    s.get(..byte_pos).map_or_else(|| char_len(s), char_len)
}

/// Trim, then drop a leading `12.` ordinal and a leading `-`, `*` or `•` bullet.
pub(crate) fn strip_list_marker(text: &str) -> &str {
    let text = text.trim();
    let text = match LEADING_ORDINAL.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    let text = match LEADING_BULLET.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    text.trim()
}

/// Title-case every word: a cased letter following another cased letter is
/// lowered, any other cased letter is raised.
///
/// Word boundaries are any non-cased character, so `two-factor` becomes
/// `Two-Factor` and `user's` becomes `User'S`.
pub(crate) fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && prev_cased {
            result.extend(c.to_lowercase());
        } else if cased {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        prev_cased = cased;
    }
    result
}
