//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for cvchat
#[derive(Parser, Debug)]
#[command(name = "cvchat")]
#[command(author, version, about = "Ask the CV query service questions from the terminal")]
#[command(long_about = r#"
cvchat sends questions to a CV query service (POST /api/query) and prints
the exchange as a running transcript.

Without a QUERY argument, or with --chat, an interactive prompt is started.
Each line you enter is sent verbatim, including an empty line.

Configuration files are loaded from (in priority order):
1. CVCHAT_* environment variables (e.g. CVCHAT_ENDPOINT__BASE_URL)
2. --config <path>     Explicit config file
3. ./cvchat.toml       Project-level config
4. ~/.config/cvchat/config.toml   Global config

Example:
  cvchat "Which candidates know Rust?"
  cvchat --endpoint http://10.0.0.7:5000 --chat
"#)]
pub struct Cli {
    /// A single query to send; omit to start chat mode
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Base URL of the query service (overrides configuration)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether the interactive prompt should run
    pub fn is_chat(&self) -> bool {
        self.chat || self.query.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_query() {
        let cli = Cli::parse_from(["cvchat", "Who knows Rust?"]);
        assert_eq!(cli.query.as_deref(), Some("Who knows Rust?"));
        assert!(!cli.is_chat());
    }

    #[test]
    fn test_no_query_means_chat() {
        let cli = Cli::parse_from(["cvchat", "-vv", "--endpoint", "http://host:5000"]);
        assert!(cli.is_chat());
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.endpoint.as_deref(), Some("http://host:5000"));
    }

    #[test]
    fn test_empty_query_is_kept() {
        let cli = Cli::parse_from(["cvchat", ""]);
        assert_eq!(cli.query.as_deref(), Some(""));
        assert!(!cli.is_chat());
    }
}
