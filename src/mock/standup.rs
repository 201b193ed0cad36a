use tracing::debug;

use crate::scrum::{Priority, SprintTask, StandupSummary, UserStory};
use crate::text::short_title;

const YESTERDAY_MARKER: &str = "- Yesterday:";
const TODAY_MARKER: &str = "- Today:";
const BLOCKERS_MARKER: &str = "- Blockers:";

const MAX_BLOCKERS: usize = 5;
const MAX_ACTION_ITEMS: usize = 3;
const MAX_TASKS: usize = 5;
const MAX_BLOCKER_STORIES: usize = 2;
const MAX_TODAY_STORIES: usize = 2;
const MAX_STORIES: usize = 3;

const TASK_HOURS: f64 = 4.0;
const BLOCKER_STORY_POINTS: u32 = 3;
const TODAY_STORY_POINTS: u32 = 5;

const BLOCKER_CRITERIA: [&str; 3] = [
    "Blocker is resolved",
    "Team can continue with planned work",
    "No further impediments from this issue",
];
const TODAY_CRITERIA: [&str; 3] = [
    "Work is completed as specified",
    "Code is reviewed and tested",
    "Documentation is updated",
];

/// Lists pulled out of markdown standup notes.
#[derive(Debug, Default)]
struct StandupNotes {
    names: Vec<String>,
    yesterday: Vec<String>,
    today: Vec<String>,
    blockers: Vec<String>,
}

impl StandupNotes {
    fn parse(text: &str) -> Self {
        let mut notes = Self::default();

        for line in text.lines() {
            if line.contains("**:") {
                if let Some(name) = line.split("**").nth(1).filter(|n| !n.is_empty()) {
                    notes.names.push(name.to_string());
                }
                continue;
            }

            let line = line.trim();
            if let Some(item) = marker_item(line, YESTERDAY_MARKER) {
                notes.yesterday.push(item);
            } else if let Some(item) = marker_item(line, TODAY_MARKER) {
                notes.today.push(item);
            } else if let Some(item) = marker_item(line, BLOCKERS_MARKER) {
                if !item.eq_ignore_ascii_case("none") {
                    notes.blockers.push(item);
                }
            }
        }

        notes
    }
}

/// Text after `marker`, if the line starts with it and anything follows.
fn marker_item(line: &str, marker: &str) -> Option<String> {
    let item = line.strip_prefix(marker)?.trim();
    (!item.is_empty()).then(|| item.to_string())
}

/// Summarize markdown standup notes of the form:
///
/// ```text
/// **Alice**:
/// - Yesterday: Finished the login page
/// - Today: Start on signup
/// - Blockers: Need test database
/// ```
pub fn mock_standup(text: &str) -> StandupSummary {
    let notes = StandupNotes::parse(text);
    debug!(
        names = notes.names.len(),
        yesterday = notes.yesterday.len(),
        today = notes.today.len(),
        blockers = notes.blockers.len(),
        "parsed standup notes"
    );

    StandupSummary {
        summary: summary(&notes),
        key_blockers: key_blockers(&notes),
        action_items: action_items(&notes),
        suggested_tasks: suggested_tasks(&notes),
        suggested_stories: suggested_stories(&notes),
    }
}

fn summary(notes: &StandupNotes) -> String {
    let team_size = notes.names.len().max(1);
    let mut summary = format!("Team of {} members reported progress. ", team_size);
    if let Some(item) = notes.yesterday.first() {
        summary.push_str(&format!(
            "Yesterday's focus included: {}. ",
            short_title(item, 80)
        ));
    }
    if let Some(item) = notes.today.first() {
        summary.push_str(&format!(
            "Today's priorities include: {}. ",
            short_title(item, 80)
        ));
    }
    if !notes.blockers.is_empty() {
        summary.push_str(&format!(
            "There are {} blocker(s) requiring attention.",
            notes.blockers.len()
        ));
    }
    summary
}

fn key_blockers(notes: &StandupNotes) -> Vec<String> {
    if notes.blockers.is_empty() {
        return vec!["No critical blockers reported".to_string()];
    }
    notes.blockers.iter().take(MAX_BLOCKERS).cloned().collect()
}

fn action_items(notes: &StandupNotes) -> Vec<String> {
    if notes.today.is_empty() {
        return vec!["Review team progress".to_string()];
    }
    notes
        .today
        .iter()
        .take(MAX_ACTION_ITEMS)
        .map(|item| format!("Follow up on: {}", short_title(item, 50)))
        .collect()
}

fn suggested_tasks(notes: &StandupNotes) -> Vec<SprintTask> {
    if notes.today.is_empty() {
        return vec![SprintTask::new(
            "Review standup outcomes",
            "Analyze the standup discussion and identify action items",
            1.0,
            Priority::Medium,
        )
        .with_parent("Sprint Management")];
    }

    notes
        .today
        .iter()
        .take(MAX_TASKS)
        .enumerate()
        .map(|(i, item)| {
            let priority = if i < 2 { Priority::High } else { Priority::Medium };
            let parent = notes.names.get(i).map_or("Team Task", String::as_str);
            SprintTask::new(
                short_title(item, 60),
                format!("Complete the following work: {}", item),
                TASK_HOURS,
                priority,
            )
            .with_parent(parent)
        })
        .collect()
}

fn suggested_stories(notes: &StandupNotes) -> Vec<UserStory> {
    let mut stories: Vec<UserStory> = notes
        .blockers
        .iter()
        .take(MAX_BLOCKER_STORIES)
        .map(|blocker| {
            UserStory::new(
                format!("Resolve: {}", short_title(blocker, 50)),
                format!(
                    "As a team member, I want to resolve '{}' so that work can proceed without delays.",
                    blocker
                ),
                BLOCKER_CRITERIA,
                BLOCKER_STORY_POINTS,
            )
        })
        .collect();

    for item in notes.today.iter().take(MAX_TODAY_STORIES) {
        if stories.len() >= MAX_STORIES {
            break;
        }
        stories.push(UserStory::new(
            short_title(item, 50),
            format!(
                "As a developer, I want to {} so that the sprint goals are met.",
                item.to_lowercase()
            ),
            TODAY_CRITERIA,
            TODAY_STORY_POINTS,
        ));
    }

    if stories.is_empty() {
        stories.push(UserStory::new(
            "Sprint Progress Tracking",
            "As a scrum master, I want to track sprint progress so that I can identify risks early.",
            ["Daily standups are conducted", "Blockers are identified and addressed"],
            2,
        ));
    }
    stories
}
