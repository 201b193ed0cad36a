use anyhow::Context as _;
use serde_json::json;

use companion::color::{self, emoji};
use companion::config::OutputFormat;

use super::Context;
use crate::output;

/// Show the last `count` history entries.
pub fn cmd_history(ctx: &Context, count: usize) -> anyhow::Result<()> {
    let log = ctx.history_log();
    let read_error = || format!("failed to read {}", log.path().display());

    match ctx.config.output_format {
        OutputFormat::Json => {
            let entries: Vec<_> = log
                .read_entries(count)
                .with_context(read_error)?
                .into_iter()
                .map(|entry| {
                    json!({
                        "timestamp": entry.timestamp.to_string(),
                        "kind": entry.kind,
                        "detail": entry.detail,
                    })
                })
                .collect();
            println!("{}", output::to_json(&entries, ctx.config.output_pretty)?);
        }
        OutputFormat::Text => {
            let lines = log.read_recent(count).with_context(read_error)?;
            if lines.is_empty() {
                println!("{} {}", emoji::WARNING, color::warning("No history yet."));
            }
            for line in &lines {
                println!("{}", color::history_line(line));
            }
        }
    }
    Ok(())
}
