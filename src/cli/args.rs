//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Render depth-marked lines as a directory-style tree
#[derive(Parser, Debug)]
#[command(name = "monotree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory searched for .monotree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Extra config file, applied after global and local config
    #[arg(long, global = true, env = "MONOTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a marker-prefixed block as a tree
    Render(RenderArgs),

    /// List available symbol sets
    Sets,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Input file, `-` or nothing for stdin
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Base symbol set (fancy, simple, or a configured set)
    #[arg(short, long)]
    pub symbols: Option<String>,

    /// Glyph for columns with nothing below
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    pub symbol_empty: Option<String>,

    /// Glyph for ancestor connectors passing through
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    pub symbol_passthrough: Option<String>,

    /// Glyph for a branch with more siblings below
    #[arg(short = 'j', long, allow_hyphen_values = true)]
    pub symbol_junction: Option<String>,

    /// Glyph for the last branch at a depth
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub symbol_terminal: Option<String>,

    /// Block attribute KEY=VALUE (repeatable), as a host document would pass them
    #[arg(short, long = "attr", value_name = "KEY=VALUE")]
    pub attrs: Vec<String>,

    /// Depth marker character
    #[arg(short, long)]
    pub marker: Option<char>,

    /// Reject lines nested more than one level below the previous line
    #[arg(long)]
    pub strict: bool,

    /// Drop whitespace-only lines
    #[arg(long)]
    pub skip_blank: bool,

    /// Wrap output in an AsciiDoc listing block
    #[arg(long)]
    pub listing: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config instead of local
        #[arg(short, long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
