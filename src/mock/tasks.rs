use tracing::debug;

use crate::scrum::{Priority, SprintTask, TasksResult};
use crate::text::{char_len, short_title};

const MAX_STORIES: usize = 10;
/// Only the first few stories get a test task.
const TESTED_STORIES: usize = 5;
const HIGH_PRIORITY_STORIES: usize = 3;
/// Lines longer than this count as stories without any marker.
const STORY_LENGTH: usize = 20;
const PARENT_LENGTH: usize = 50;

const DESIGN_HOURS: f64 = 3.0;
const IMPLEMENT_HOURS: f64 = 6.0;
const TEST_HOURS: f64 = 2.0;

/// Hours above which the breakdown warns about sprint capacity.
const CAPACITY_WARNING_HOURS: f64 = 80.0;
/// More stories than this suggests splitting across sprints.
const SPLIT_WARNING_STORIES: usize = 5;
const EMPTY_TOTAL_HOURS: f64 = 2.0;

/// Break a list of user stories into design, implementation and test tasks.
pub fn mock_tasks(text: &str) -> TasksResult {
    let stories: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(story_text)
        .collect();
    debug!(stories = stories.len(), "found user stories");

    let tasks: Vec<SprintTask> = stories
        .iter()
        .take(MAX_STORIES)
        .enumerate()
        .flat_map(|(i, story)| story_tasks(i, story))
        .collect();

    let total: f64 = tasks.iter().filter_map(|t| t.estimated_hours).sum();

    let mut recommendations = Vec::new();
    if stories.len() > SPLIT_WARNING_STORIES {
        recommendations.push(format!(
            "Consider splitting the {} stories across multiple sprints",
            stories.len()
        ));
    }
    if total > CAPACITY_WARNING_HOURS {
        recommendations.push(format!(
            "Total estimated hours ({}h) may exceed sprint capacity",
            total
        ));
    }
    recommendations.push("Prioritize stories based on business value and dependencies".to_string());

    if tasks.is_empty() {
        return TasksResult {
            tasks: vec![SprintTask::new(
                "Analyze requirements",
                "Review and analyze the provided requirements",
                EMPTY_TOTAL_HOURS,
                Priority::High,
            )
            .with_parent("General")],
            total_estimated_hours: Some(EMPTY_TOTAL_HOURS),
            recommendations,
        };
    }

    TasksResult {
        tasks,
        total_estimated_hours: Some(total),
        recommendations,
    }
}

/// The story carried by a trimmed line, if the line reads like one.
fn story_text(line: &str) -> Option<&str> {
    if let Some(story) = line.strip_prefix("- ") {
        return Some(story);
    }
    let lowered = line.to_lowercase();
    if lowered.contains("as a") || lowered.contains("i want") || char_len(line) > STORY_LENGTH {
        Some(line)
    } else {
        None
    }
}

fn story_tasks(index: usize, story: &str) -> Vec<SprintTask> {
    let parent = short_title(story, PARENT_LENGTH);
    let priority = if index < HIGH_PRIORITY_STORIES {
        Priority::High
    } else {
        Priority::Medium
    };

    let mut tasks = vec![
        SprintTask::new(
            format!("Design: {}", parent),
            format!("Create design and technical specification for: {}", story),
            DESIGN_HOURS,
            priority,
        )
        .with_parent(parent.as_str()),
        SprintTask::new(
            format!("Implement: {}", parent),
            format!("Develop and implement the functionality for: {}", story),
            IMPLEMENT_HOURS,
            priority,
        )
        .with_parent(parent.as_str()),
    ];

    if index < TESTED_STORIES {
        tasks.push(
            SprintTask::new(
                format!("Test: {}", parent),
                format!("Write and execute tests for: {}", story),
                TEST_HOURS,
                Priority::Medium,
            )
            .with_parent(parent.as_str()),
        );
    }
    tasks
}
