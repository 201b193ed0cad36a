use once_cell::sync::Lazy;
use regex::Regex;

/// A line made only of markup punctuation and whitespace.
static DECORATIVE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s=\-*#_|~`]+$").expect("decorative pattern compiles"));

/// Three or more of the same delimiter symbol.
static DELIMITER_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"={3,}|-{3,}|_{3,}|\*{3,}|#{3,}|~{3,}|`{3,}|\|{3,}")
        .expect("delimiter pattern compiles")
});

/// Strip decorative delimiter lines and embedded delimiter runs from text.
///
/// Each line is trimmed. Lines made solely of `= - * # _ | ~` and backticks are
/// dropped; surviving lines lose every run of three or more identical
/// delimiter symbols and are kept when something remains. Survivors are
/// joined with `\n`.
///
/// Runs are removed until none are left, so a run that only forms once a
/// neighbouring run is gone (`==---=`) is removed as well, and normalizing
/// twice gives the same text as normalizing once.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.lines()
        .filter_map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || DECORATIVE_LINE.is_match(trimmed) {
        return None;
    }

    let mut cleaned = trimmed.to_string();
    while DELIMITER_RUN.is_match(&cleaned) {
        cleaned = DELIMITER_RUN.replace_all(&cleaned, "").into_owned();
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
