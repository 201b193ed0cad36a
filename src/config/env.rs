use std::env;

use super::types::{Config, OutputFormat};

pub(super) fn apply_env(config: &mut Config) {
    apply_env_from(config, |key| env::var(key).ok());
}

/// Apply `COMPANION_*` variables read through `lookup`. Values that do not
/// parse are ignored.
pub(super) fn apply_env_from<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("COMPANION_OUTPUT_FORMAT") {
        if let Some(format) = OutputFormat::parse(&val) {
            config.output_format = format;
        }
    }
    if let Some(val) = lookup("COMPANION_OUTPUT_PRETTY") {
        if let Some(pretty) = parse_bool(&val) {
            config.output_pretty = pretty;
        }
    }
    if let Some(val) = lookup("COMPANION_SPRINT_DURATION_DAYS") {
        if let Ok(n) = val.trim().parse() {
            config.sprint_duration_days = n;
        }
    }
    if let Some(val) = lookup("COMPANION_TEAM_CAPACITY") {
        if let Ok(n) = val.trim().parse() {
            config.team_capacity = Some(n);
        }
    }
    if let Some(val) = lookup("COMPANION_HISTORY_ENABLED") {
        if let Some(enabled) = parse_bool(&val) {
            config.history_enabled = enabled;
        }
    }
    if let Some(val) = lookup("COMPANION_HISTORY_PATH") {
        if !val.is_empty() {
            config.history_path = val;
        }
    }
    if let Some(val) = lookup("COMPANION_HISTORY_MAX_LINES") {
        if let Ok(n) = val.trim().parse() {
            config.history_max_lines = n;
        }
    }
    if let Some(val) = lookup("COMPANION_LOG_LEVEL") {
        if !val.is_empty() {
            config.log_level = val;
        }
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
