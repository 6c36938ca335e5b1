//! Command-line interface definitions.
//!
//! Defines the CLI structure for wynnxp using `clap`.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Browse items ranked by XP bonus, with a local 24h cache
#[derive(Parser, Debug)]
#[command(name = "wynnxp")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.wynnxp/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Whether to emit colors. `Auto` means stdout is a terminal and
    /// `NO_COLOR` is unset.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

/// Top-level subcommands for the wynnxp CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show items by category, using the cache when it is fresh
    Show(ViewArgs),

    /// Show per-category totals only
    Summary,

    /// Fetch items now, ignoring the cache
    Fetch(ViewArgs),

    /// Show items and refresh them every 24 hours until interrupted
    Watch(ViewArgs),

    /// Inspect or clear the item cache
    #[command(subcommand)]
    Cache(CacheCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Listing options shared by `show`, `fetch` and `watch`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Only show this category (repeatable, e.g. `--category ring`)
    #[arg(long = "category", value_name = "KEY")]
    pub categories: Vec<String>,

    /// Start with every category collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Expand item cards to show requirements, stats and drop location
    #[arg(long)]
    pub details: bool,
}

/// Subcommands for `wynnxp cache`.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Show cache age, size and freshness
    Status,
    /// Delete the cached items and the last update time
    Clear,
}

/// Subcommands for `wynnxp config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show,
}
