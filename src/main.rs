use std::env;
use std::process;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use companion::color::{self, emoji};
use companion::config::{self, CliArgs, Command, Config, DEFAULT_CONFIG_FILE};
use companion::engine::MockEngine;

mod commands;
mod output;

fn main() {
    let cli = config::parse_args(env::args_os()).unwrap_or_else(|e| e.exit());

    // `init` creates the file named by --config, so it cannot load it.
    let loaded = match cli.command {
        Command::Init { .. } => Ok(Config::default()),
        _ => Config::load(&cli),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    init_tracing(&config, cli.verbose);
    debug!(command = cli.command.name(), "starting");

    if let Err(e) = run(&cli, &config) {
        fail(&format!("{:#}", e));
    }
}

fn run(cli: &CliArgs, config: &Config) -> anyhow::Result<()> {
    let engine = MockEngine::new();
    let ctx = commands::Context::new(config, &engine);

    match &cli.command {
        Command::Standup { file, goal } => commands::cmd_standup(&ctx, file.as_deref(), goal.clone()),
        Command::Stories { file, context } => {
            commands::cmd_stories(&ctx, file.as_deref(), context.clone())
        }
        Command::Tasks { file, .. } => commands::cmd_tasks(&ctx, file.as_deref()),
        Command::Analyze { role, file } => commands::cmd_analyze(&ctx, role, file.as_deref()),
        Command::History { count } => commands::cmd_history(&ctx, *count),
        Command::Init { force } => {
            let path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
            commands::cmd_init(path, *force)
        }
    }
}

/// Log to stderr so stdout carries only command output.
///
/// `RUST_LOG` wins, then `-v`/`-vv`, then the configured level.
fn init_tracing(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.log_level.as_str(),
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn fail(message: &dyn std::fmt::Display) -> ! {
    eprintln!("{} {}", emoji::CROSS, color::error(&format!("error: {}", message)));
    process::exit(1);
}
