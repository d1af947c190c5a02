//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for scout
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(author, version, about = "Single-agent web research assistant")]
#[command(long_about = r#"
Scout answers questions with a single tool-calling research agent: the model
decides per question whether to answer directly or search the web first.

Without a question, scout starts the web form UI.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./scout.toml        Project-level config
3. ~/.config/scout/config.toml   Global config

Example:
  scout "Who won the 2025 Ballon d'Or?"
  scout --serve --addr 0.0.0.0:8080
  scout -m llama-3.1-8b-instant "Latest news about the xAI Colossus cluster"
"#)]
pub struct Cli {
    /// The question to answer (omit to start the web UI)
    pub question: Option<String>,

    /// Start the web form UI (implied when no question is given)
    #[arg(long)]
    pub serve: bool,

    /// Socket address for the web UI (overrides config)
    #[arg(long, value_name = "ADDR")]
    pub addr: Option<String>,

    /// Model to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,

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
