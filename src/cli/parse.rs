//! CLI parse: clap types for fixity. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Fixity CLI - directory inventory and checksum manifest
#[derive(Parser, Debug)]
#[command(name = "fixity")]
#[command(about = "Inventory a directory tree into a CSV checksum manifest (SHA-1 + MD5)")]
pub struct Cli {
    /// Root directory to inventory (prompted for interactively if omitted)
    pub root: Option<PathBuf>,

    /// Manifest file name, created inside the root
    #[arg(long)]
    pub output_name: Option<String>,

    /// Resolve symlinks to their targets instead of skipping them
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Configuration file path (overrides default fixity.toml loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress the progress display
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
