//! Fixity CLI binary
//!
//! Thin plumbing around the scan core: argument parsing, the interactive
//! root prompt, progress display, and manifest creation. The core itself
//! never touches a console.

use clap::Parser;
use fixity::cli::{self, Cli};
use fixity::config::FileConfig;
use fixity::error::FixityError;
use fixity::logging::{init_logging, LoggingConfig};
use fixity::manifest::CsvManifest;
use fixity::progress::{NullProgress, ProgressReporter, TerminalProgress};
use fixity::scan::Scanner;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let file_config = match load_file_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", cli::map_error(&e));
            process::exit(e.exit_code());
        }
    };

    let logging_config = build_logging_config(&cli, &file_config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Fixity CLI starting");

    if let Err(e) = run(&cli, &file_config) {
        error!("Run failed: {}", e);
        eprintln!("{}", cli::map_error(&e));
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli, file_config: &FileConfig) -> Result<(), FixityError> {
    let root = match cli.root.clone() {
        Some(root) => root,
        None => prompt_for_root()?,
    };

    let mut config = file_config.scan_config(root);
    if let Some(ref name) = cli.output_name {
        config.manifest_name = name.clone();
    }
    if cli.follow_symlinks {
        config.follow_symlinks = true;
    }
    let config = config.canonicalized()?;

    let scanner = Scanner::new(&config);
    let mut manifest = CsvManifest::create(&config.root, &config.manifest_name)?;

    let mut progress: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(NullProgress)
    } else {
        Box::new(TerminalProgress::new())
    };

    let summary = scanner.run(&mut manifest, progress.as_mut())?;
    progress.finish();
    let manifest_path = manifest.finish()?;

    println!("{}", cli::format_summary(&summary, &manifest_path));
    Ok(())
}

/// Ask for the root directory when no argument was given.
fn prompt_for_root() -> Result<PathBuf, FixityError> {
    let answer: String = dialoguer::Input::new()
        .with_prompt("Enter the folder path to inventory")
        .interact_text()
        .map_err(|e| FixityError::Config(format!("Failed to read folder path: {}", e)))?;
    Ok(PathBuf::from(answer.trim()))
}

fn load_file_config(cli: &Cli) -> Result<FileConfig, FixityError> {
    match cli.config {
        Some(ref path) => FileConfig::load_from_file(path),
        None => FileConfig::load(),
    }
}

/// Build logging configuration from CLI args and the config file.
fn build_logging_config(cli: &Cli, file_config: &FileConfig) -> LoggingConfig {
    let mut config = file_config.logging.clone();

    if cli.verbose && config.level == "off" {
        config.level = "info".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
