use companion::scrum::StoriesRequest;

use super::{read_input, Context};
use crate::output;

/// Draft user stories from meeting notes read from `file` (or stdin).
pub fn cmd_stories(ctx: &Context, file: Option<&str>, context: Option<String>) -> anyhow::Result<()> {
    let notes = read_input(file)?;
    let request = StoriesRequest {
        notes: notes.trim().to_string(),
        context,
    };
    let result = ctx.assistant().generate_user_stories(&request)?;
    output::emit(ctx.config, &result, output::render_stories)?;

    ctx.record(
        "stories",
        &format!(
            "{} stories via {}",
            result.stories.len(),
            ctx.assistant().engine_name()
        ),
    );
    Ok(())
}
