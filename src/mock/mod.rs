//! Heuristic analyzer that fabricates Scrum records from raw text.
//!
//! Every generator is total and deterministic: empty or keyword-free input
//! degrades to fixed sentinel records, and identical input always yields
//! byte-identical JSON.
//!
//! Callers that know what they want pass a [`MockKind`] to [`generate`].
//! [`dispatch_mock`] keeps the older entry point that picks the generator
//! by sniffing keywords in a system prompt.

mod standup;
mod stories;
mod tasks;

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::scrum::{Priority, SprintTask, StandupSummary, StoriesResult, TasksResult};
use crate::text::normalize;

pub use standup::mock_standup;
pub use stories::mock_stories;
pub use tasks::mock_tasks;

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    Standup,
    Stories,
    Tasks,
    Generic,
}

/// Keyword routes, checked in order against the lower-cased system prompt.
const ROUTES: &[(MockKind, &[&str])] = &[
    (MockKind::Standup, &["scrum master", "standup"]),
    (MockKind::Tasks, &["technical lead", "sprint tasks"]),
    (MockKind::Stories, &["agile coach", "extract user stories"]),
];

impl MockKind {
    /// Pick a generator from a system prompt (case-insensitive).
    pub fn sniff(system_role: &str) -> Self {
        let lowered = system_role.to_lowercase();
        ROUTES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map_or(MockKind::Generic, |(kind, _)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MockKind::Standup => "standup",
            MockKind::Stories => "stories",
            MockKind::Tasks => "tasks",
            MockKind::Generic => "generic",
        }
    }
}

impl fmt::Display for MockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one generator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MockOutput {
    Standup(StandupSummary),
    Stories(StoriesResult),
    Tasks(TasksResult),
}

impl MockOutput {
    /// Compact JSON encoding.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            warn!(error = %err, "failed to encode mock output");
            String::from("{}")
        })
    }
}

/// Normalize `user_text` and run the generator for `kind`.
pub fn generate(kind: MockKind, user_text: &str) -> MockOutput {
    let text = normalize(user_text);
    debug!(kind = %kind, lines = text.lines().count(), "generating mock output");
    match kind {
        MockKind::Standup => MockOutput::Standup(mock_standup(&text)),
        MockKind::Stories => MockOutput::Stories(mock_stories(&text)),
        MockKind::Tasks => MockOutput::Tasks(mock_tasks(&text)),
        MockKind::Generic => MockOutput::Tasks(generic_fallback()),
    }
}

/// Sniff the generator from `system_role`, run it on `user_text` and
/// encode the result as JSON.
pub fn dispatch_mock(system_role: &str, user_text: &str) -> String {
    generate(MockKind::sniff(system_role), user_text).to_json()
}

/// The record emitted when the system prompt names no known generator.
pub fn generic_fallback() -> TasksResult {
    TasksResult {
        tasks: vec![SprintTask::new(
            "Analyze requirements",
            "Review and analyze the provided requirements to identify key deliverables.",
            2.0,
            Priority::High,
        )
        .with_parent("General")],
        total_estimated_hours: Some(2.0),
        recommendations: vec!["Review requirements carefully before implementation".to_string()],
    }
}
