//! Runtime settings
//!
//! Case content is compiled in. Only the front end and the log filter can
//! be chosen at start-up, from arguments and the environment.

use clap::Parser;

/// Environment variable overriding the default log filter
pub const LOG_ENV: &str = "DETECTIVE_QUEST_LOG";

/// Log filter when nothing else is set. The TUI owns the screen, so it
/// stays quiet unless asked.
const DEFAULT_TUI_FILTER: &str = "off";
const DEFAULT_PLAIN_FILTER: &str = "detective_quest=warn";

#[derive(Parser, Debug)]
#[command(name = "detective-quest", version, about, long_about = None)]
pub struct Cli {
    /// Line-based console instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// tracing filter (e.g. detective_quest=debug); RUST_LOG wins if set
    #[arg(long, env = "DETECTIVE_QUEST_LOG")]
    pub log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Tui,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub frontend: Frontend,
    pub log_filter: String,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let frontend = if cli.plain { Frontend::Plain } else { Frontend::Tui };
        let log_filter = cli
            .log
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| match frontend {
                Frontend::Tui => DEFAULT_TUI_FILTER.to_string(),
                Frontend::Plain => DEFAULT_PLAIN_FILTER.to_string(),
            });

        Settings { frontend, log_filter }
    }

    /// Parse the process arguments. Exits on `--help`, `--version` and
    /// unknown flags.
    pub fn from_env() -> Self {
        Self::from_cli(Cli::parse())
    }
}
