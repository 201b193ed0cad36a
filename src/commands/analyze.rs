use anyhow::Context as _;
use tracing::debug;

use companion::engine::ChatMessage;
use companion::mock::MockKind;

use super::{read_input, Context};
use crate::output;

/// Send `role` as the system prompt and the input as the user message,
/// then print the engine's JSON reply.
pub fn cmd_analyze(ctx: &Context, role: &str, file: Option<&str>) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let kind = MockKind::sniff(role);
    debug!(kind = %kind, "routing analysis");

    let reply = ctx
        .engine
        .complete(&[ChatMessage::system(role), ChatMessage::user(text)])
        .into_output()
        .map_err(anyhow::Error::msg)?;

    let value: serde_json::Value =
        serde_json::from_str(&reply).context("engine returned invalid JSON")?;
    println!("{}", output::to_json(&value, ctx.config.output_pretty)?);

    ctx.record("analyze", &format!("{} via {}", kind, ctx.engine.name()));
    Ok(())
}
