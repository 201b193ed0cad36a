//! Companion: a Scrum text-analysis toolkit.
//!
//! Turns standup notes, meeting notes and user stories into structured
//! summaries, user stories and sprint tasks. Analysis runs through an
//! [`engine::Engine`]; the built-in [`engine::MockEngine`] answers with
//! deterministic heuristics so everything works offline.
//!
//! ## Layout
//!
//! - [`text`] - normalizer, title synthesizer and key-phrase extractor
//! - [`scrum`] - records, requests, input parsing and validation
//! - [`mock`] - heuristic standup/stories/tasks generators and dispatcher
//! - [`assistant`] - validated operations with fallback records
//! - [`history`] - rotating log of analysis runs

pub mod assistant;
pub mod color;
pub mod config;
pub mod engine;
pub mod history;
pub mod mock;
pub mod prompt;
pub mod scrum;
pub mod text;
