use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{Config, ConfigError, OutputFormat};

/// On-disk layout of companion.toml. Every key is optional; missing keys
/// keep their defaults and unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    output: OutputSection,
    sprint: SprintSection,
    history: HistorySection,
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
    format: Option<OutputFormat>,
    pretty: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SprintSection {
    duration_days: Option<u32>,
    team_capacity: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HistorySection {
    enabled: Option<bool>,
    path: Option<String>,
    max_lines: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
}

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let file: FileConfig =
        ::toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_string()))?;

    let mut config = Config::default();

    if let Some(format) = file.output.format {
        config.output_format = format;
    }
    if let Some(pretty) = file.output.pretty {
        config.output_pretty = pretty;
    }
    if let Some(days) = file.sprint.duration_days {
        config.sprint_duration_days = days;
    }
    if file.sprint.team_capacity.is_some() {
        config.team_capacity = file.sprint.team_capacity;
    }
    if let Some(enabled) = file.history.enabled {
        config.history_enabled = enabled;
    }
    if let Some(path) = file.history.path {
        config.history_path = path;
    }
    if let Some(max_lines) = file.history.max_lines {
        config.history_max_lines = max_lines;
    }
    if let Some(level) = file.log.level {
        config.log_level = level;
    }

    Ok(config)
}
