use std::fmt;

use serde::{Deserialize, Serialize};

/// Default sprint length in days.
pub const DEFAULT_SPRINT_DURATION_DAYS: u32 = 14;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team member's daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupEntry {
    /// Team member name.
    pub name: String,
    /// What was accomplished yesterday.
    pub yesterday: String,
    /// What is planned for today.
    pub today: String,
    /// Blockers or impediments, if any.
    #[serde(default)]
    pub blockers: Option<String>,
}

impl StandupEntry {
    /// Create an entry without blockers.
    pub fn new(
        name: impl Into<String>,
        yesterday: impl Into<String>,
        today: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            yesterday: yesterday.into(),
            today: today.into(),
            blockers: None,
        }
    }

    /// Attach blockers.
    pub fn with_blockers(mut self, blockers: impl Into<String>) -> Self {
        self.blockers = Some(blockers.into());
        self
    }

    /// Format this entry as the markdown block the standup prompt uses:
    ///
    /// ```text
    /// **Alice**:
    /// - Yesterday: ...
    /// - Today: ...
    /// - Blockers: None
    /// ```
    pub fn to_markdown(&self) -> String {
        let blockers = self
            .blockers
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or("None");
        format!(
            "**{}**:\n- Yesterday: {}\n- Today: {}\n- Blockers: {}",
            self.name, self.yesterday, self.today, blockers
        )
    }
}

/// An actionable unit of engineering work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintTask {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub parent_story: Option<String>,
}

impl SprintTask {
    /// Create a task with an hour estimate and no parent story.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_hours: f64,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            estimated_hours: Some(estimated_hours),
            priority,
            parent_story: None,
        }
    }

    /// Set the parent story.
    pub fn with_parent(mut self, parent_story: impl Into<String>) -> Self {
        self.parent_story = Some(parent_story.into());
        self
    }
}

/// A requirement in "As a ..., I want ... so that ..." form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStory {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    /// Relative effort, 1 to 21 when present.
    #[serde(default)]
    pub story_points: Option<u32>,
}

impl UserStory {
    /// Create a story with acceptance criteria and a point estimate.
    pub fn new<I, S>(
        title: impl Into<String>,
        description: impl Into<String>,
        acceptance_criteria: I,
        story_points: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            acceptance_criteria: acceptance_criteria.into_iter().map(Into::into).collect(),
            story_points: Some(story_points),
        }
    }
}

/// Summary of a standup with derived work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandupSummary {
    pub summary: String,
    #[serde(default)]
    pub key_blockers: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub suggested_tasks: Vec<SprintTask>,
    #[serde(default)]
    pub suggested_stories: Vec<UserStory>,
}

/// User stories drafted from meeting notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesResult {
    pub stories: Vec<UserStory>,
    #[serde(default)]
    pub raw_insights: Option<String>,
}

/// Sprint tasks broken down from user stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksResult {
    pub tasks: Vec<SprintTask>,
    #[serde(default)]
    pub total_estimated_hours: Option<f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Request to summarize standup entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupRequest {
    pub entries: Vec<StandupEntry>,
    #[serde(default)]
    pub sprint_goal: Option<String>,
}

/// Request to draft user stories from meeting notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesRequest {
    pub notes: String,
    /// Additional context about the project.
    #[serde(default)]
    pub context: Option<String>,
}

/// Request to break user stories into sprint tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksRequest {
    pub user_stories: Vec<String>,
    /// Team capacity in story points.
    #[serde(default)]
    pub team_capacity: Option<u32>,
    #[serde(default = "default_sprint_duration")]
    pub sprint_duration_days: u32,
}

impl TasksRequest {
    /// Create a request for a default-length sprint with no capacity limit.
    pub fn new(user_stories: Vec<String>) -> Self {
        Self {
            user_stories,
            team_capacity: None,
            sprint_duration_days: DEFAULT_SPRINT_DURATION_DAYS,
        }
    }
}

fn default_sprint_duration() -> u32 {
    DEFAULT_SPRINT_DURATION_DAYS
}
