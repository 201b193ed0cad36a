//! Command implementations for the companion CLI.

use std::fs;
use std::io::{self, Read};

use anyhow::Context as _;
use tracing::warn;

use companion::assistant::Assistant;
use companion::config::Config;
use companion::engine::Engine;
use companion::history::HistoryLog;

pub mod analyze;
pub mod history;
pub mod init;
pub mod standup;
pub mod stories;
pub mod tasks;

pub use analyze::cmd_analyze;
pub use history::cmd_history;
pub use init::cmd_init;
pub use standup::cmd_standup;
pub use stories::cmd_stories;
pub use tasks::cmd_tasks;

/// Everything a command needs from the resolved configuration.
pub struct Context<'a> {
    pub config: &'a Config,
    pub engine: &'a dyn Engine,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a Config, engine: &'a dyn Engine) -> Self {
        Self { config, engine }
    }

    pub fn assistant(&self) -> Assistant<'a> {
        Assistant::new(self.engine)
    }

    /// History log at the configured path, whether or not recording is on.
    pub fn history_log(&self) -> HistoryLog {
        HistoryLog::new(&self.config.history_path).with_max_lines(self.config.history_max_lines)
    }

    /// Record a run in the history log. Failures are logged, not returned.
    pub fn record(&self, kind: &str, detail: &str) {
        if !self.config.history_enabled {
            return;
        }
        if let Err(e) = self.history_log().record(kind, detail) {
            warn!(path = %self.config.history_path, error = %e, "failed to record history");
        }
    }
}

/// Read command input from `file`, or from stdin when it is `None` or `-`.
pub fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion::engine::MockEngine;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "Alice: a | b | c\n").unwrap();
        let content = read_input(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(content, "Alice: a | b | c\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some("/nonexistent/notes.txt")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read /nonexistent/notes.txt"));
    }

    #[test]
    fn test_record_respects_history_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.log");
        let engine = MockEngine::new();

        let mut config = Config {
            history_path: path.to_string_lossy().to_string(),
            history_enabled: false,
            ..Config::default()
        };
        Context::new(&config, &engine).record("tasks", "3 stories");
        assert!(!path.exists());

        config.history_enabled = true;
        Context::new(&config, &engine).record("tasks", "3 stories");
        let lines = fs::read_to_string(&path).unwrap();
        assert!(lines.trim_end().ends_with("| tasks | 3 stories"));
    }
}
