use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::{DEFAULT_HISTORY_PATH, DEFAULT_MAX_LINES};
use crate::scrum::DEFAULT_SPRINT_DURATION_DAYS;

use super::cli::{CliArgs, Command};
use super::{env, toml};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "companion.toml";

/// Default tracing filter when neither `RUST_LOG` nor `-v` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored text.
    #[default]
    Text,
    /// The JSON record.
    Json,
}

impl OutputFormat {
    /// Parse output format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Companion configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_format: OutputFormat,
    /// Pretty-print JSON output.
    pub output_pretty: bool,
    pub sprint_duration_days: u32,
    /// Team capacity in story points.
    pub team_capacity: Option<u32>,
    pub history_enabled: bool,
    pub history_path: String,
    /// Lines kept in the history file before rotation.
    pub history_max_lines: usize,
    /// Tracing filter directive, e.g. `warn` or `companion=debug`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            output_pretty: true,
            sprint_duration_days: DEFAULT_SPRINT_DURATION_DAYS,
            team_capacity: None,
            history_enabled: true,
            history_path: DEFAULT_HISTORY_PATH.to_string(),
            history_max_lines: DEFAULT_MAX_LINES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    ///
    /// A file named with `--config` must exist; the default
    /// `companion.toml` is optional.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match cli_args.config {
            Some(ref path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_env();
        config.apply_cli(cli_args);

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    /// Apply `COMPANION_*` environment variables.
    fn apply_env(&mut self) {
        env::apply_env(self);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.output_format = format;
        }
        if args.compact {
            self.output_pretty = false;
        }
        if args.no_history {
            self.history_enabled = false;
        }
        if let Command::Tasks {
            capacity, duration, ..
        } = &args.command
        {
            if let Some(days) = duration {
                self.sprint_duration_days = *days;
            }
            if capacity.is_some() {
                self.team_capacity = *capacity;
            }
        }
    }

    /// Generate default companion.toml content.
    pub fn default_toml() -> String {
        format!(
            r#"# Companion configuration

[output]
format = "text"  # text or json
pretty = true

[sprint]
duration_days = {}
# team_capacity = 30  # story points

[history]
enabled = true
path = "{}"
max_lines = {}

[log]
level = "{}"  # overridden by RUST_LOG or -v
"#,
            DEFAULT_SPRINT_DURATION_DAYS, DEFAULT_HISTORY_PATH, DEFAULT_MAX_LINES, DEFAULT_LOG_LEVEL
        )
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {0}")]
    Io(String),
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}
