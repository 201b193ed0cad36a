use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::scrum::{StoriesResult, UserStory};
use crate::text::{char_len, key_phrase, short_title, strip_list_marker};

/// Words that mark a line as a requirement.
const KEYWORDS: &[&str] = &[
    "need", "want", "should", "must", "require", "feature", "user", "admin", "customer", "ability",
];

/// Lines longer than this are kept even without a keyword.
const SUBSTANTIAL_LENGTH: usize = 50;

const MAX_STORIES: usize = 8;
const TITLE_LENGTH: usize = 45;
const DESCRIPTION_LENGTH: usize = 120;
const FALLBACK_SUMMARY_LENGTH: usize = 100;

/// "the admin team wants to " and similar openings, already covered by the
/// role in the story template.
static ROLE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:the\s+)?(?:admin|user|customer|manager)\s+(?:team\s+)?(?:wants?\s+to\s+|needs?\s+to\s+)?",
    )
    .expect("role prefix pattern compiles")
});

/// Draft user stories from meeting notes, one per requirement-like line.
pub fn mock_stories(text: &str) -> StoriesResult {
    let relevant: Vec<&str> = text
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty() && is_relevant(line))
        .collect();
    debug!(relevant = relevant.len(), "selected requirement lines");

    let mut stories: Vec<UserStory> = relevant
        .iter()
        .take(MAX_STORIES)
        .enumerate()
        .map(|(i, line)| story_from_line(i, line))
        .collect();

    if stories.is_empty() {
        stories.push(UserStory::new(
            "Implement Requirements",
            format!(
                "As a user, I want the system to handle: {}",
                short_title(text, FALLBACK_SUMMARY_LENGTH)
            ),
            [
                "Requirements are implemented",
                "Functionality is tested",
                "Documentation is complete",
            ],
            5,
        ));
    }

    let raw_insights = format!(
        "Analyzed {} relevant items from the meeting notes. Generated {} user stories based on the content provided.",
        relevant.len(),
        stories.len()
    );

    StoriesResult {
        stories,
        raw_insights: Some(raw_insights),
    }
}

fn is_relevant(line: &str) -> bool {
    let lowered = line.to_lowercase();
    KEYWORDS.iter().any(|k| lowered.contains(k)) || char_len(line) > SUBSTANTIAL_LENGTH
}

fn infer_role(lowered: &str) -> &'static str {
    if lowered.contains("admin") {
        "admin"
    } else if lowered.contains("customer") {
        "customer"
    } else if lowered.contains("manager") {
        "manager"
    } else {
        "user"
    }
}

fn story_from_line(index: usize, line: &str) -> UserStory {
    let lowered = line.to_lowercase();
    let role = infer_role(&lowered);

    let mut title = key_phrase(line);
    if char_len(&title) > TITLE_LENGTH {
        title = short_title(&title, TITLE_LENGTH);
    }

    let mut description = ROLE_PREFIX.replace(&lowered, "").trim().to_string();
    if char_len(&description) > DESCRIPTION_LENGTH {
        description = short_title(&description, DESCRIPTION_LENGTH);
    }

    UserStory::new(
        title,
        format!(
            "As a {}, I want to {} so that I can accomplish my goals efficiently.",
            role, description
        ),
        [
            format!("The {} can access the feature", role),
            "The functionality works as expected".to_string(),
            "Appropriate validation and error handling is in place".to_string(),
            "The feature is documented".to_string(),
        ],
        if index < 3 { 5 } else { 3 },
    )
}
