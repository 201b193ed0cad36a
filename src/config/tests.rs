use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use super::env::apply_env_from;
use super::*;

fn cli(args: &[&str]) -> CliArgs {
    let mut argv = vec!["companion"];
    argv.extend_from_slice(args);
    parse_args(argv).unwrap()
}

fn apply_vars(config: &mut Config, vars: &[(&str, &str)]) {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    apply_env_from(config, |key| vars.get(key).cloned());
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::parse("TEXT"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::parse("yaml"), None);
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.output_pretty);
    assert_eq!(config.sprint_duration_days, 14);
    assert_eq!(config.team_capacity, None);
    assert!(config.history_enabled);
    assert_eq!(config.history_path, ".companion/history.log");
    assert_eq!(config.history_max_lines, 1000);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
format = "json"
pretty = false

[sprint]
duration_days = 10
team_capacity = 30

[history]
enabled = false
path = "logs/runs.log"
max_lines = 50

[log]
level = "debug"
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(!config.output_pretty);
    assert_eq!(config.sprint_duration_days, 10);
    assert_eq!(config.team_capacity, Some(30));
    assert!(!config.history_enabled);
    assert_eq!(config.history_path, "logs/runs.log");
    assert_eq!(config.history_max_lines, 50);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_config_parse_toml_partial_and_unknown_keys() {
    let toml = r#"
[sprint]
duration_days = 7

[engine]
type = "whatever"
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.sprint_duration_days, 7);
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.history_enabled);
}

#[test]
fn test_config_parse_toml_invalid_values() {
    let err = Config::parse_toml("[output]\nformat = \"yaml\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = Config::parse_toml("[sprint]\nduration_days = \"two weeks\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    assert!(Config::parse_toml("this is not toml").is_err());
}

#[test]
fn test_config_parse_toml_empty() {
    assert_eq!(Config::parse_toml("").unwrap(), Config::default());
}

#[test]
fn test_default_toml_roundtrips_to_defaults() {
    let toml = Config::default_toml();
    assert!(toml.contains("duration_days = 14"));
    assert!(toml.contains("path = \".companion/history.log\""));
    assert_eq!(Config::parse_toml(&toml).unwrap(), Config::default());
}

#[test]
fn test_load_from_missing_file() {
    let err = Config::load_from_file("/nonexistent/companion.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("config I/O error:"));
}

#[test]
fn test_apply_env() {
    let mut config = Config::default();
    apply_vars(
        &mut config,
        &[
            ("COMPANION_OUTPUT_FORMAT", "json"),
            ("COMPANION_OUTPUT_PRETTY", "0"),
            ("COMPANION_SPRINT_DURATION_DAYS", "21"),
            ("COMPANION_TEAM_CAPACITY", "40"),
            ("COMPANION_HISTORY_ENABLED", "false"),
            ("COMPANION_HISTORY_PATH", "/tmp/h.log"),
            ("COMPANION_HISTORY_MAX_LINES", "10"),
            ("COMPANION_LOG_LEVEL", "info"),
        ],
    );
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(!config.output_pretty);
    assert_eq!(config.sprint_duration_days, 21);
    assert_eq!(config.team_capacity, Some(40));
    assert!(!config.history_enabled);
    assert_eq!(config.history_path, "/tmp/h.log");
    assert_eq!(config.history_max_lines, 10);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_apply_env_ignores_bad_values() {
    let mut config = Config::default();
    apply_vars(
        &mut config,
        &[
            ("COMPANION_OUTPUT_FORMAT", "xml"),
            ("COMPANION_OUTPUT_PRETTY", "maybe"),
            ("COMPANION_SPRINT_DURATION_DAYS", "-3"),
            ("COMPANION_HISTORY_PATH", ""),
        ],
    );
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_args_commands() {
    assert_eq!(cli(&["init"]).command, Command::Init { force: false });
    assert_eq!(cli(&["init", "--force"]).command, Command::Init { force: true });
    assert_eq!(cli(&["history"]).command, Command::History { count: 20 });
    assert_eq!(cli(&["history", "-n", "5"]).command, Command::History { count: 5 });
    assert_eq!(
        cli(&["standup", "notes.txt", "--goal", "Ship it"]).command,
        Command::Standup {
            file: Some("notes.txt".to_string()),
            goal: Some("Ship it".to_string()),
        }
    );
    assert_eq!(
        cli(&["analyze", "--role", "You are a technical lead."]).command,
        Command::Analyze {
            role: "You are a technical lead.".to_string(),
            file: None,
        }
    );
}

#[test]
fn test_parse_args_global_flags_after_subcommand() {
    let args = cli(&["stories", "--format", "json", "--compact", "-vv", "--no-history"]);
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert!(args.compact);
    assert!(args.no_history);
    assert_eq!(args.verbose, 2);
    assert_eq!(args.command.name(), "stories");
}

#[test]
fn test_parse_args_errors() {
    assert!(parse_args(["companion"]).is_err());
    assert!(parse_args(["companion", "deploy"]).is_err());
    assert!(parse_args(["companion", "analyze"]).is_err());
    assert!(parse_args(["companion", "tasks", "--capacity", "lots"]).is_err());
    assert!(parse_args(["companion", "--format", "yaml", "init"]).is_err());
}

#[test]
fn test_apply_cli() {
    let mut config = Config::default();
    config.apply_cli(&cli(&[
        "--format",
        "json",
        "--compact",
        "--no-history",
        "tasks",
        "--capacity",
        "25",
        "--duration",
        "10",
    ]));
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(!config.output_pretty);
    assert!(!config.history_enabled);
    assert_eq!(config.team_capacity, Some(25));
    assert_eq!(config.sprint_duration_days, 10);
}

#[test]
fn test_apply_cli_keeps_sprint_settings_without_flags() {
    let mut config = Config {
        team_capacity: Some(12),
        ..Config::default()
    };
    config.apply_cli(&cli(&["tasks"]));
    assert_eq!(config.team_capacity, Some(12));
    assert_eq!(config.sprint_duration_days, 14);
}

#[test]
fn test_config_load_with_file_and_cli_precedence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n\n[sprint]\nduration_days = 5\n").unwrap();
    let path = path.to_string_lossy().to_string();

    let config = Config::load(&cli(&["--config", &path, "tasks", "--duration", "9"])).unwrap();
    assert_eq!(config.sprint_duration_days, 9);

    let config = Config::load(&cli(&["--config", &path, "--format", "text", "init"])).unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_config_load_missing_explicit_file() {
    let result = Config::load(&cli(&["--config", "/nonexistent/companion.toml", "init"]));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
