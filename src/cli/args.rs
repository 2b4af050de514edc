//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Render binary trees as aligned ASCII art, several trees side by side
#[derive(Parser, Debug)]
#[command(name = "treevis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw search trees side by side
    Draw {
        /// One comma-separated value list per tree, inserted in order
        #[arg(required = true, value_name = "VALUES")]
        trees: Vec<String>,

        /// Color code (0-255) for every node
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=255))]
        color: Option<i64>,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Order values as text instead of integers
        #[arg(long)]
        text: bool,
    },

    /// Show search trees as an indented outline
    Outline {
        /// One comma-separated value list per tree, inserted in order
        #[arg(required = true, value_name = "VALUES")]
        trees: Vec<String>,

        /// Order values as text instead of integers
        #[arg(long)]
        text: bool,
    },

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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
}
