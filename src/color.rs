//! ANSI styling for text output.
//!
//! Every helper wraps its argument in one style and a trailing reset, so
//! styled fragments can be nested inside plain `format!` output.

use std::fmt::Display;

use crate::scrum::Priority;

/// ANSI escape sequences.
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";

    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

fn paint(style: &str, text: impl Display) -> String {
    format!("{style}{text}{RESET}")
}

pub fn timestamp(ts: &str) -> String {
    paint(DIM, ts)
}

pub fn success(text: &str) -> String {
    paint(GREEN, text)
}

pub fn error(text: &str) -> String {
    paint(RED, text)
}

pub fn warning(text: &str) -> String {
    paint(YELLOW, text)
}

pub fn info(text: &str) -> String {
    paint(CYAN, text)
}

/// Section headings and record titles.
pub fn label(text: &str) -> String {
    paint(BOLD, text)
}

/// Counts, hours and story points.
pub fn number(n: impl Display) -> String {
    paint(BRIGHT_CYAN, n)
}

/// Bold priority name: high red, medium yellow, low blue.
pub fn priority(p: Priority) -> String {
    let hue = match p {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => BLUE,
    };
    paint(&format!("{BOLD}{hue}"), p)
}

/// Analysis kind column of a history line.
pub fn kind(text: &str) -> String {
    paint(&format!("{BOLD}{MAGENTA}"), text)
}

/// Style a `timestamp | kind | detail` history line. Anything else is
/// returned unchanged.
pub fn history_line(line: &str) -> String {
    let mut fields = line.splitn(3, " | ");
    match (fields.next(), fields.next(), fields.next()) {
        (Some(ts), Some(k), Some(detail)) => {
            format!("{} | {} | {}", timestamp(ts), kind(k), detail)
        }
        _ => line.to_string(),
    }
}

/// Markers used in text output.
pub mod emoji {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARNING: &str = "⚠️";
    pub const SPRINT: &str = "🏃";
    pub const TASK: &str = "📋";
    pub const STORY: &str = "📖";
    pub const BLOCKER: &str = "🚧";
    pub const ACTION: &str = "👉";
    pub const CLOCK: &str = "🕐";
    pub const BULB: &str = "💡";
    pub const TEAM: &str = "👥";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_styles() {
        let high = priority(Priority::High);
        assert_eq!(high, format!("{BOLD}{RED}high{RESET}"));
        assert!(priority(Priority::Medium).contains(YELLOW));
        assert!(priority(Priority::Low).contains(BLUE));
    }

    #[test]
    fn test_paint_wraps_and_resets() {
        assert_eq!(label("Summary"), format!("{BOLD}Summary{RESET}"));
        assert_eq!(number(4.5), format!("{BRIGHT_CYAN}4.5{RESET}"));
        assert!(error("boom").starts_with(RED));
    }

    #[test]
    fn test_history_line_styles_fields() {
        let styled = history_line("2026-01-26 00:01:26 | standup | 2 entries | 1 blocker");
        assert!(styled.starts_with(&format!("{DIM}2026-01-26 00:01:26{RESET}")));
        assert!(styled.contains(MAGENTA));
        assert!(styled.ends_with(" | 2 entries | 1 blocker"));
    }

    #[test]
    fn test_history_line_passthrough() {
        let line = "not a history line";
        assert_eq!(history_line(line), line);
        assert_eq!(history_line("a | b"), "a | b");
    }
}
