//! Engine abstraction for chat-style completions.
//!
//! The assistant talks to an engine with a list of role-tagged messages and
//! expects a JSON document back. Backends:
//! - `mock`: deterministic heuristic analyzer (no network)

use std::fmt;

use serde::{Deserialize, Serialize};

mod mock;

pub use mock::MockEngine;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => f.write_str("system"),
            Role::User => f.write_str("user"),
        }
    }
}

/// One message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Outcome of one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResult {
    pub success: bool,
    /// Completion text, empty on failure.
    pub output: String,
    pub error: Option<String>,
}

impl EngineResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
        }
    }

    /// The completion text, or the error message of a failed run.
    pub fn into_output(self) -> Result<String, String> {
        if self.success {
            Ok(self.output)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "unknown engine error".to_string()))
        }
    }
}

/// Engine trait for completion backends.
pub trait Engine: Send + Sync {
    /// Complete a conversation. The first message is normally the system
    /// prompt and the last one the user's request.
    fn complete(&self, messages: &[ChatMessage]) -> EngineResult;

    /// Short backend name for logs and history.
    fn name(&self) -> &'static str;
}
