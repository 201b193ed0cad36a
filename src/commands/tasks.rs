use anyhow::bail;

use companion::scrum::{parse_story_lines, TasksRequest};

use super::{read_input, Context};
use crate::output;

/// Break user stories (one per line) read from `file` (or stdin) into
/// sprint tasks, using the configured sprint length and capacity.
pub fn cmd_tasks(ctx: &Context, file: Option<&str>) -> anyhow::Result<()> {
    let content = read_input(file)?;
    let stories = parse_story_lines(&content);
    if stories.is_empty() {
        bail!("No user stories found. Put one story per line");
    }

    let request = TasksRequest {
        user_stories: stories,
        team_capacity: ctx.config.team_capacity,
        sprint_duration_days: ctx.config.sprint_duration_days,
    };
    let result = ctx.assistant().suggest_sprint_tasks(&request)?;
    output::emit(ctx.config, &result, output::render_tasks)?;

    let hours = result
        .total_estimated_hours
        .map(|h| format!("{}h", h))
        .unwrap_or_else(|| "unestimated".to_string());
    ctx.record(
        "tasks",
        &format!(
            "{} stories -> {} tasks ({})",
            request.user_stories.len(),
            result.tasks.len(),
            hours
        ),
    );
    Ok(())
}
