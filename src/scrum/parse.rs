use crate::text::strip_list_marker;

use super::StandupEntry;

/// Parse standup entries from `Name: yesterday | today | blockers` lines.
///
/// Lines without a `:` or with an empty name are skipped. Missing segments
/// become empty strings; an empty blockers segment becomes `None`.
pub fn parse_entries(content: &str) -> Vec<StandupEntry> {
    content.lines().filter_map(parse_entry_line).collect()
}

pub(super) fn parse_entry_line(line: &str) -> Option<StandupEntry> {
    let (name, rest) = line.trim().split_once(':')?;
    let name = strip_list_marker(name);
    if name.is_empty() {
        return None;
    }

    let mut segments = rest.splitn(3, '|').map(str::trim);
    let yesterday = segments.next().unwrap_or_default();
    let today = segments.next().unwrap_or_default();
    let blockers = segments.next().filter(|b| !b.is_empty());

    let entry = StandupEntry::new(name, yesterday, today);
    Some(match blockers {
        Some(blockers) => entry.with_blockers(blockers),
        None => entry,
    })
}

/// One user story per non-blank line, with list markers removed.
pub fn parse_story_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
