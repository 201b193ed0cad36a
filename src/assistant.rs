//! Scrum operations on top of an [`Engine`].
//!
//! Each operation validates its request, sends the rendered prompts to the
//! engine and decodes the JSON reply. Replies that fail to decode or break
//! the record schema are replaced by fixed fallback records, so callers
//! always get a well-formed result once the request itself is valid.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use crate::engine::{ChatMessage, Engine};
use crate::prompt;
use crate::scrum::{
    Priority, SprintTask, StandupRequest, StandupSummary, StoriesRequest, StoriesResult,
    TasksRequest, TasksResult, UserStory, Validate, ValidationError,
};
use crate::text::take_chars;

/// Characters of raw engine output kept in the stories fallback.
const FALLBACK_DESCRIPTION_LENGTH: usize = 500;

/// Why an engine reply could not be used.
#[derive(Debug, Error)]
enum ReplyError {
    #[error("engine failed: {0}")]
    Engine(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record: {0}")]
    Schema(#[from] ValidationError),
}

/// Scrum assistant bound to one engine.
pub struct Assistant<'a> {
    engine: &'a dyn Engine,
}

impl<'a> Assistant<'a> {
    pub fn new(engine: &'a dyn Engine) -> Self {
        Self { engine }
    }

    /// Name of the engine behind this assistant.
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Summarize standup entries into blockers, action items and work.
    pub fn summarize_standup(
        &self,
        request: &StandupRequest,
    ) -> Result<StandupSummary, ValidationError> {
        request.validate()?;
        info!(entries = request.entries.len(), engine = self.engine.name(), "summarizing standup");

        let (raw, parsed) = self.ask(&prompt::standup_messages(request));
        Ok(parsed.unwrap_or_else(|err| {
            warn!(error = %err, "standup reply unusable, returning raw text");
            StandupSummary {
                summary: raw,
                key_blockers: Vec::new(),
                action_items: Vec::new(),
                suggested_tasks: Vec::new(),
                suggested_stories: Vec::new(),
            }
        }))
    }

    /// Draft user stories from meeting notes.
    pub fn generate_user_stories(
        &self,
        request: &StoriesRequest,
    ) -> Result<StoriesResult, ValidationError> {
        request.validate()?;
        info!(notes_chars = request.notes.len(), engine = self.engine.name(), "generating user stories");

        let (raw, parsed) = self.ask(&prompt::stories_messages(request));
        Ok(parsed.unwrap_or_else(|err| {
            warn!(error = %err, "stories reply unusable, returning generated story");
            StoriesResult {
                stories: vec![UserStory {
                    title: "Generated Story".to_string(),
                    description: take_chars(&raw, FALLBACK_DESCRIPTION_LENGTH).to_string(),
                    acceptance_criteria: Vec::new(),
                    story_points: None,
                }],
                raw_insights: None,
            }
        }))
    }

    /// Break user stories into sprint tasks.
    pub fn suggest_sprint_tasks(
        &self,
        request: &TasksRequest,
    ) -> Result<TasksResult, ValidationError> {
        request.validate()?;
        info!(
            stories = request.user_stories.len(),
            duration_days = request.sprint_duration_days,
            engine = self.engine.name(),
            "suggesting sprint tasks"
        );

        let (_, parsed) = self.ask(&prompt::tasks_messages(request));
        Ok(parsed.unwrap_or_else(|err| {
            warn!(error = %err, "tasks reply unusable, returning planning task");
            TasksResult {
                tasks: vec![SprintTask::new(
                    "Review and plan",
                    "Review user stories and create detailed tasks",
                    2.0,
                    Priority::High,
                )],
                total_estimated_hours: Some(2.0),
                recommendations: vec!["Manual task breakdown recommended".to_string()],
            }
        }))
    }

    /// Run the engine and decode its reply, keeping the raw text for
    /// fallbacks.
    fn ask<T>(&self, messages: &[ChatMessage]) -> (String, Result<T, ReplyError>)
    where
        T: DeserializeOwned + Validate,
    {
        match self.engine.complete(messages).into_output() {
            Ok(raw) => {
                let parsed = parse_reply(&raw);
                (raw, parsed)
            }
            Err(error) => (String::new(), Err(ReplyError::Engine(error))),
        }
    }
}

fn parse_reply<T>(raw: &str) -> Result<T, ReplyError>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_str(strip_code_fences(raw))?;
    record.validate()?;
    Ok(record)
}

/// Remove a surrounding markdown code fence (```` ```json ... ``` ````).
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineResult, MockEngine};
    use crate::scrum::StandupEntry;

    /// Engine that replies with a fixed result.
    struct ScriptedEngine(EngineResult);

    impl Engine for ScriptedEngine {
        fn complete(&self, _messages: &[ChatMessage]) -> EngineResult {
            self.0.clone()
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    fn standup_request() -> StandupRequest {
        StandupRequest {
            entries: vec![
                StandupEntry::new("Alice", "Finished login", "Start signup")
                    .with_blockers("Need test database"),
                StandupEntry::new("Bob", "Reviewed PRs", "Pair with Alice").with_blockers("None"),
            ],
            sprint_goal: Some("Ship onboarding".to_string()),
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```"), "");
    }

    #[test]
    fn test_summarize_standup_with_mock() {
        let engine = MockEngine::new();
        let assistant = Assistant::new(&engine);
        let summary = assistant.summarize_standup(&standup_request()).unwrap();
        assert_eq!(summary.key_blockers, vec!["Need test database"]);
        assert_eq!(summary.suggested_tasks.len(), 2);
        assert_eq!(summary.suggested_tasks[0].parent_story.as_deref(), Some("Alice"));
        assert!(summary.summary.starts_with("Team of 2 members reported progress."));
    }

    #[test]
    fn test_generate_stories_with_mock() {
        let engine = MockEngine::new();
        let assistant = Assistant::new(&engine);
        let request = StoriesRequest {
            notes: "Users need password reset.\nAdmin needs user management.".to_string(),
            context: None,
        };
        let result = assistant.generate_user_stories(&request).unwrap();
        assert_eq!(result.stories.len(), 2);
        assert!(result.stories[1].description.starts_with("As a admin,"));
        assert!(result.raw_insights.is_some());
    }

    #[test]
    fn test_suggest_tasks_with_mock() {
        let engine = MockEngine::new();
        let assistant = Assistant::new(&engine);
        let request = TasksRequest::new(vec!["Users can reset their password by email".to_string()]);
        let result = assistant.suggest_sprint_tasks(&request).unwrap();
        assert_eq!(result.tasks.len(), 3);
        assert_eq!(result.total_estimated_hours, Some(11.0));
    }

    #[test]
    fn test_invalid_request_rejected_before_engine() {
        let engine = ScriptedEngine(EngineResult::failure("must not be called"));
        let assistant = Assistant::new(&engine);
        let request = StoriesRequest {
            notes: "short".to_string(),
            context: None,
        };
        assert!(matches!(
            assistant.generate_user_stories(&request),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn test_standup_fallback_keeps_raw_output() {
        let engine = ScriptedEngine(EngineResult::success("The team is doing fine."));
        let assistant = Assistant::new(&engine);
        let summary = assistant.summarize_standup(&standup_request()).unwrap();
        assert_eq!(summary.summary, "The team is doing fine.");
        assert!(summary.key_blockers.is_empty());
        assert!(summary.suggested_stories.is_empty());
    }

    #[test]
    fn test_stories_fallback_truncates_output() {
        let engine = ScriptedEngine(EngineResult::success("x".repeat(800)));
        let assistant = Assistant::new(&engine);
        let request = StoriesRequest {
            notes: "Users need password reset".to_string(),
            context: None,
        };
        let result = assistant.generate_user_stories(&request).unwrap();
        assert_eq!(result.stories.len(), 1);
        assert_eq!(result.stories[0].title, "Generated Story");
        assert_eq!(result.stories[0].description.len(), 500);
        assert_eq!(result.raw_insights, None);
    }

    #[test]
    fn test_tasks_fallback_on_engine_failure() {
        let engine = ScriptedEngine(EngineResult::failure("timeout"));
        let assistant = Assistant::new(&engine);
        let result = assistant
            .suggest_sprint_tasks(&TasksRequest::new(vec!["Story".to_string()]))
            .unwrap();
        assert_eq!(result.tasks[0].title, "Review and plan");
        assert_eq!(result.tasks[0].priority, Priority::High);
        assert_eq!(result.total_estimated_hours, Some(2.0));
        assert_eq!(result.recommendations, vec!["Manual task breakdown recommended"]);
    }

    #[test]
    fn test_schema_violation_uses_fallback() {
        let reply = r#"{"tasks":[{"title":"t","description":"d","estimated_hours":0.1}],"recommendations":[]}"#;
        let engine = ScriptedEngine(EngineResult::success(reply));
        let assistant = Assistant::new(&engine);
        let result = assistant
            .suggest_sprint_tasks(&TasksRequest::new(vec!["Story".to_string()]))
            .unwrap();
        assert_eq!(result.tasks[0].title, "Review and plan");
    }

    #[test]
    fn test_fenced_reply_is_accepted() {
        let reply = "```json\n{\"tasks\":[{\"title\":\"Write docs\",\"description\":\"d\",\"estimated_hours\":1,\"priority\":\"low\"}],\"total_estimated_hours\":1}\n```";
        let engine = ScriptedEngine(EngineResult::success(reply));
        let assistant = Assistant::new(&engine);
        let result = assistant
            .suggest_sprint_tasks(&TasksRequest::new(vec!["Story".to_string()]))
            .unwrap();
        assert_eq!(result.tasks[0].title, "Write docs");
        assert_eq!(result.tasks[0].priority, Priority::Low);
        assert!(result.recommendations.is_empty());
    }
}
