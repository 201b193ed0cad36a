use tracing::debug;

use crate::mock::dispatch_mock;

use super::{ChatMessage, Engine, EngineResult};

/// Mock engine backed by the heuristic analyzer.
///
/// Routes on the first message (the system prompt) and analyzes the last
/// one. Output is deterministic and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEngine;

impl MockEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for MockEngine {
    fn complete(&self, messages: &[ChatMessage]) -> EngineResult {
        let system = messages.first().map_or("", |m| m.content.as_str());
        let user = messages.last().map_or("", |m| m.content.as_str());
        debug!(
            messages = messages.len(),
            system_chars = system.len(),
            user_chars = user.len(),
            "mock completion"
        );
        EngineResult::success(dispatch_mock(system, user))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrum::{StoriesResult, TasksResult};

    #[test]
    fn test_mock_engine_routes_on_system_prompt() {
        let engine = MockEngine::new();
        let result = engine.complete(&[
            ChatMessage::system("You are a technical lead."),
            ChatMessage::user("- Users can export reports as CSV"),
        ]);
        assert!(result.success);
        let tasks: TasksResult = serde_json::from_str(&result.output).unwrap();
        assert_eq!(tasks.tasks.len(), 3);
    }

    #[test]
    fn test_mock_engine_deterministic() {
        let engine = MockEngine::new();
        let messages = [
            ChatMessage::system("You are an Agile coach."),
            ChatMessage::user("Users need password reset.\nAdmin needs user management."),
        ];
        let first = engine.complete(&messages);
        let second = engine.complete(&messages);
        assert_eq!(first, second);
        let stories: StoriesResult = serde_json::from_str(&first.output).unwrap();
        assert_eq!(stories.stories.len(), 2);
    }

    #[test]
    fn test_mock_engine_without_messages() {
        let result = MockEngine::new().complete(&[]);
        assert!(result.success);
        let tasks: TasksResult = serde_json::from_str(&result.output).unwrap();
        assert_eq!(tasks.tasks[0].title, "Analyze requirements");
    }

    #[test]
    fn test_mock_engine_name() {
        assert_eq!(MockEngine.name(), "mock");
    }
}
