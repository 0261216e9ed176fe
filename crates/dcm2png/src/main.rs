//! dcm2png CLI - Convert directories of DICOM files to PNG images.
//!
//! Recursively scans an input directory for `.dcm` files, converts each
//! one to a PNG named from its embedded metadata, and reports one status
//! line per file. Conversions run in parallel across a bounded worker
//! pool; a malformed file is reported and skipped, never fatal.
//!
//! # Usage
//!
//! ```bash
//! # Convert a directory tree
//! dcm2png convert ./dicom ./png
//!
//! # Custom suffix and worker count, with failure detail
//! dcm2png convert ./dicom ./png --suffix study42 --max-workers 16 --verbose
//!
//! # View configuration
//! dcm2png config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// dcm2png - Convert DICOM files to PNG files.
#[derive(Parser, Debug)]
#[command(name = "dcm2png")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging and per-file failure detail
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert DICOM files under a directory to PNG images
    Convert(cli::convert::ConvertArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match dcm2png_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `dcm2png config path`."
            );
            dcm2png_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("dcm2png v{}", dcm2png_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Convert(args) => cli::convert::execute(args, cli.verbose).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
