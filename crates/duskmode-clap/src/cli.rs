//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Read, toggle, or set the persisted light/dark display preference.
#[derive(Debug, Parser)]
#[command(name = "duskmode", version, about)]
pub struct Cli {
    /// Preference file (defaults to duskmode/preferences.json in the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// YAML store configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output mode
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the current mode (default)
    Show,
    /// Flip between light and dark
    Toggle,
    /// Set the mode; any value is accepted, only "dark" is dark
    Set {
        #[arg(value_name = "MODE")]
        mode: String,
    },
    /// Exit with status 0 when the mode is dark, 1 otherwise
    IsDark,
    /// Print the root element's class attribute
    Classes,
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout is a color terminal, plain otherwise
    #[default]
    Auto,
    /// Always styled
    Term,
    /// Never styled
    Text,
    /// JSON object
    Json,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }
}
