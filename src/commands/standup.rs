use anyhow::bail;

use companion::scrum::{parse_entries, StandupRequest};

use super::{read_input, Context};
use crate::output;

/// Summarize standup entries read from `file` (or stdin).
pub fn cmd_standup(ctx: &Context, file: Option<&str>, goal: Option<String>) -> anyhow::Result<()> {
    let content = read_input(file)?;
    let entries = parse_entries(&content);
    if entries.is_empty() {
        bail!("No valid standup entries found. Expected lines like 'Name: yesterday | today | blockers'");
    }

    let request = StandupRequest {
        entries,
        sprint_goal: goal.filter(|g| !g.trim().is_empty()),
    };
    let summary = ctx.assistant().summarize_standup(&request)?;
    output::emit(ctx.config, &summary, output::render_standup)?;

    ctx.record(
        "standup",
        &format!(
            "{} entries via {}, {} blockers",
            request.entries.len(),
            ctx.assistant().engine_name(),
            summary.key_blockers.len()
        ),
    );
    Ok(())
}
