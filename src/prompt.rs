//! Prompt templates and rendering.
//!
//! System prompts are embedded from the `prompts/` directory at build time
//! and rendered with `{{variable}}` substitution.

use std::collections::HashMap;

use crate::engine::ChatMessage;
use crate::scrum::{StandupRequest, StoriesRequest, TasksRequest};

const STANDUP_PROMPT: &str = include_str!("../prompts/standup.md");
const STORIES_PROMPT: &str = include_str!("../prompts/stories.md");
const TASKS_PROMPT: &str = include_str!("../prompts/tasks.md");

/// Render a prompt template with variable substitution.
///
/// Variables are specified as `{{variable_name}}` in the template.
pub fn render(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// System prompt for standup summaries.
pub fn standup_system() -> &'static str {
    STANDUP_PROMPT
}

/// System prompt for story extraction.
pub fn stories_system() -> &'static str {
    STORIES_PROMPT
}

/// System prompt for task breakdown, sized to the sprint.
pub fn tasks_system(sprint_duration_days: u32, team_capacity: Option<u32>) -> String {
    let mut vars = HashMap::new();
    vars.insert("duration", sprint_duration_days.to_string());
    vars.insert(
        "capacity",
        team_capacity
            .map(|c| format!(" with {} story points capacity", c))
            .unwrap_or_default(),
    );
    render(TASKS_PROMPT, &vars)
}

pub fn standup_user(request: &StandupRequest) -> String {
    let goal = request
        .sprint_goal
        .as_deref()
        .filter(|g| !g.is_empty())
        .unwrap_or("Not specified");
    let entries = request
        .entries
        .iter()
        .map(|e| e.to_markdown())
        .collect::<Vec<_>>()
        .join("\n");
    format!("Sprint Goal: {}\n\nStandup Entries:\n{}", goal, entries)
}

pub fn stories_user(request: &StoriesRequest) -> String {
    let context = request
        .context
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or("General software project");
    format!("Context: {}\n\nMeeting Notes:\n{}", context, request.notes)
}

pub fn tasks_user(request: &TasksRequest) -> String {
    let stories = request
        .user_stories
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n");
    format!("User Stories:\n{}", stories)
}

/// Full conversation for a standup summary.
pub fn standup_messages(request: &StandupRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(standup_system()),
        ChatMessage::user(standup_user(request)),
    ]
}

/// Full conversation for story extraction.
pub fn stories_messages(request: &StoriesRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(stories_system()),
        ChatMessage::user(stories_user(request)),
    ]
}

/// Full conversation for task breakdown.
pub fn tasks_messages(request: &TasksRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(tasks_system(
            request.sprint_duration_days,
            request.team_capacity,
        )),
        ChatMessage::user(tasks_user(request)),
    ]
}
