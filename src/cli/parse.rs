//! CLI parse: clap types for project-map. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// project-map - render a workspace subtree as a text tree and a PNG
#[derive(Parser)]
#[command(name = "project-map")]
#[command(about = "Render a filesystem subtree as a text tree and a color-coded image")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Result summary format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which top-level entries to include
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Include only this top-level entry (repeatable); default is every entry
    #[arg(long = "include", value_name = "NAME")]
    pub include: Vec<String>,

    /// Pick entries with an interactive multi-select prompt
    #[arg(long, conflicts_with = "include")]
    pub interactive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the text tree (directory roots labeled, children indented)
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Write the text tree and rasterize it into a PNG
    Canvas {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Rasterize an existing text tree into a PNG
    Render {
        /// Text artifact to read
        input: PathBuf,
        /// Image to write (default: input with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the selectable top-level entries
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}
