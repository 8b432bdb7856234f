//! Command-line interface module

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::conversion::{Mode, ModeSelection};
use crate::error::ConversionError;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csvconv")]
#[command(about = "Convert JSON arrays to CSV with structure-aware mode detection")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON source (string, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output CSV path (default: stdout, or <input>.csv for file input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Force flatten mode: nested objects and arrays become individual columns
    #[arg(long, conflicts_with = "transpose")]
    pub flatten: bool,

    /// Force transpose mode: parallel-array groups become hierarchical headers
    #[arg(long)]
    pub transpose: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

impl Args {
    /// The mode selection expressed by the flags
    pub fn mode_selection(&self) -> ModeSelection {
        if self.flatten {
            ModeSelection::Flatten
        } else if self.transpose {
            ModeSelection::Transpose
        } else {
            ModeSelection::Auto
        }
    }
}

/// Default output path for a file input, named after the effective mode:
/// `data.json` becomes `data.csv`, `data_flattened.csv`, or
/// `data_transposed.csv`
pub fn default_output_path(input: &Path, mode: Mode) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let file_name = match mode {
        Mode::Plain => format!("{}.csv", stem),
        Mode::Flatten => format!("{}_flattened.csv", stem),
        Mode::Transpose => format!("{}_transposed.csv", stem),
    };

    input.with_file_name(file_name)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Create a progress bar for batch file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ConversionError::Parse(err) => {
            if let Some(preview) = &err.input_preview {
                eprintln!("\n{}", preview);
            }
        }
        ConversionError::Structure(_) => {
            eprintln!("\nTip: omit --flatten/--transpose to let the structure be auto-detected");
        }
        _ => {}
    }

    eprintln!("\nTry 'csvconv --help' for usage information.");
}
