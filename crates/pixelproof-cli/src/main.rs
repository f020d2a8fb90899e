//! PixelProof CLI
//!
//! Command-line interface for comparing designed style against rendered style

use clap::{Parser, Subcommand, ValueEnum};
use pixelproof_core::config::PixelProofConfig;
use pixelproof_core::logging_facility::{self, Profile};
use pixelproof_core_types::RunId;
use std::path::PathBuf;

mod commands;

use commands::Outcome;

#[derive(Debug, Parser)]
#[command(name = "pixelproof")]
#[command(about = "PixelProof - Check rendered elements against their design", long_about = None)]
struct Cli {
    /// Log output format, written to stderr (default: from config, else human)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Human => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare a design fingerprint against a rendered fingerprint
    Compare(commands::compare::CompareArgs),
    /// Normalize a computed-style map into a rendered fingerprint
    CaptureRendered(commands::capture_rendered::CaptureRenderedArgs),
    /// Normalize a design-tool node into a design fingerprint
    CaptureDesign(commands::capture_design::CaptureDesignArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(PixelProofConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let profile = cli
        .log_format
        .map(Profile::from)
        .unwrap_or(config.logging.profile);
    logging_facility::init(profile);

    let run_id = RunId::new();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args, &config, &run_id),
        Commands::CaptureRendered(args) => commands::capture_rendered::execute(args, &run_id),
        Commands::CaptureDesign(args) => commands::capture_design::execute(args, &run_id),
    };

    match result {
        Ok(Outcome::Success) => {}
        Ok(Outcome::MismatchesFound) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
