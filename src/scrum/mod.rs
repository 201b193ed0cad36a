//! Scrum records exchanged with the analysis engine.
//!
//! Results (`StandupSummary`, `StoriesResult`, `TasksResult`) serialize to
//! the JSON documents the engine emits. Requests carry the caller's input
//! and are checked with [`Validate`] before any engine call.
//!
//! Plain-text standup input uses one line per person:
//! - `Alice: Finished login | Start signup | Waiting on API keys`
//! - `Bob: Reviewed PRs | Pairing with Alice`

mod model;
mod parse;
mod validate;


pub use model::{
    Priority, SprintTask, StandupEntry, StandupRequest, StandupSummary, StoriesRequest,
    StoriesResult, TasksRequest, TasksResult, UserStory, DEFAULT_SPRINT_DURATION_DAYS,
};
pub use parse::{parse_entries, parse_story_lines};
pub use validate::{
    Validate, ValidationError, MAX_SPRINT_DURATION_DAYS, MIN_ESTIMATED_HOURS, MIN_NOTES_LENGTH,
    STORY_POINTS_RANGE,
};
