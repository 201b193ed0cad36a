use std::fmt::Write as _;

use anyhow::Context as _;
use serde::Serialize;

use companion::color::{self, emoji};
use companion::config::{Config, OutputFormat};
use companion::scrum::{SprintTask, StandupSummary, StoriesResult, TasksResult, UserStory};

/// Encode a record as JSON, pretty-printed unless `pretty` is false.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to encode output as JSON")
}

/// Print a record in the configured format.
pub(crate) fn emit<T: Serialize>(
    config: &Config,
    value: &T,
    render: fn(&T) -> String,
) -> anyhow::Result<()> {
    match config.output_format {
        OutputFormat::Json => println!("{}", to_json(value, config.output_pretty)?),
        OutputFormat::Text => print!("{}", render(value)),
    }
    Ok(())
}

pub(crate) fn render_standup(summary: &StandupSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} {} ===", emoji::TEAM, color::label("STANDUP SUMMARY"));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", summary.summary.trim_end());
    let _ = writeln!(out);

    section(&mut out, emoji::BLOCKER, "Key blockers", &summary.key_blockers);
    section(&mut out, emoji::ACTION, "Action items", &summary.action_items);

    let _ = writeln!(out, "{} {}:", emoji::TASK, color::label("Suggested tasks"));
    for task in &summary.suggested_tasks {
        render_task(&mut out, task);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{} {}:", emoji::STORY, color::label("Suggested stories"));
    for story in &summary.suggested_stories {
        render_story(&mut out, story);
    }
    out
}

pub(crate) fn render_stories(result: &StoriesResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== {} {} ({}) ===",
        emoji::STORY,
        color::label("USER STORIES"),
        color::number(result.stories.len())
    );
    let _ = writeln!(out);
    for story in &result.stories {
        render_story(&mut out, story);
    }
    if let Some(ref insights) = result.raw_insights {
        let _ = writeln!(out, "{} {}", emoji::BULB, color::info(insights));
    }
    out
}

pub(crate) fn render_tasks(result: &TasksResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== {} {} ({}) ===",
        emoji::SPRINT,
        color::label("SPRINT TASKS"),
        color::number(result.tasks.len())
    );
    let _ = writeln!(out);
    for task in &result.tasks {
        render_task(&mut out, task);
    }
    let _ = writeln!(out);
    if let Some(total) = result.total_estimated_hours {
        let _ = writeln!(
            out,
            "{} Total estimated hours: {}",
            emoji::CLOCK,
            color::number(total)
        );
    }
    section(&mut out, emoji::BULB, "Recommendations", &result.recommendations);
    out
}

fn section(out: &mut String, icon: &str, title: &str, items: &[String]) {
    let _ = writeln!(out, "{} {}:", icon, color::label(title));
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
    let _ = writeln!(out);
}

fn render_task(out: &mut String, task: &SprintTask) {
    let hours = task
        .estimated_hours
        .map(|h| format!("{}h", h))
        .unwrap_or_else(|| "?h".to_string());
    let _ = writeln!(
        out,
        "  [{}] {} ({})",
        color::priority(task.priority),
        task.title,
        color::number(hours)
    );
    if let Some(ref parent) = task.parent_story {
        let _ = writeln!(out, "      story: {}", parent);
    }
}

fn render_story(out: &mut String, story: &UserStory) {
    let points = story
        .story_points
        .map(|p| format!(" ({} pts)", color::number(p)))
        .unwrap_or_default();
    let _ = writeln!(out, "  {}{}", color::label(&story.title), points);
    let _ = writeln!(out, "    {}", story.description);
    for criterion in &story.acceptance_criteria {
        let _ = writeln!(out, "    {} {}", emoji::CHECK, criterion);
    }
    let _ = writeln!(out);
}
