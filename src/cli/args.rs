//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Composite trees of leaves and folders, rendered depth-first as indented outlines
#[derive(Parser, Debug)]
#[command(name = "comptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a directory as a pre-order outline
    Render {
        /// Directory to scan (default: cwd)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
        #[command(flatten)]
        render: RenderArgs,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Print a directory as a box-drawing tree
    Tree {
        /// Directory to scan (default: cwd)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Show node, leaf and depth counts of a directory tree
    Stats {
        /// Directory to scan (default: cwd)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Render the built-in file system example
    Demo {
        #[command(flatten)]
        render: RenderArgs,
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

/// Outline overrides, each falling back to configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Depth of the root line
    #[arg(long)]
    pub depth: Option<usize>,
    /// Depth increment per level
    #[arg(long)]
    pub step: Option<usize>,
    /// Indent marker character
    #[arg(long)]
    pub marker: Option<char>,
}

/// Scan overrides, each falling back to configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct ScanArgs {
    /// Include dot files and dot directories
    #[arg(long)]
    pub hidden: bool,
    /// Deepest level to descend to
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show {
        /// Directory whose .comptree.toml is merged in
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
    /// Print the global config file location
    Path,
}
