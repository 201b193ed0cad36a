use clap::{ArgAction, Parser, Subcommand};

use super::types::OutputFormat;

/// Scrum companion: turn standup notes, meeting notes and user stories
/// into structured summaries, stories and sprint tasks.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "companion", version, about, long_about = None)]
pub struct CliArgs {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (default: companion.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Do not record this run in the history log.
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Companion subcommands.
///
/// `FILE` arguments read from stdin when omitted or `-`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize standup entries (`Name: yesterday | today | blockers` lines).
    Standup {
        file: Option<String>,
        /// Sprint goal to include in the prompt.
        #[arg(short, long)]
        goal: Option<String>,
    },
    /// Draft user stories from meeting notes.
    Stories {
        file: Option<String>,
        /// Project context, e.g. "Mobile banking app".
        #[arg(long)]
        context: Option<String>,
    },
    /// Break user stories (one per line) into sprint tasks.
    Tasks {
        file: Option<String>,
        /// Team capacity in story points.
        #[arg(long)]
        capacity: Option<u32>,
        /// Sprint length in days.
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Run the analyzer directly with a system prompt and print its JSON.
    Analyze {
        /// System prompt used to pick the analysis.
        #[arg(long)]
        role: String,
        file: Option<String>,
    },
    /// Show recent analysis history.
    History {
        /// Number of entries to show.
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
    },
    /// Write a default companion.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    /// Name used in logs and history.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standup { .. } => "standup",
            Self::Stories { .. } => "stories",
            Self::Tasks { .. } => "tasks",
            Self::Analyze { .. } => "analyze",
            Self::History { .. } => "history",
            Self::Init { .. } => "init",
        }
    }
}

/// Parse CLI arguments from an iterator (the first item is the program name).
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}
