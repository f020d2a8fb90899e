//! Compare command
//!
//! Usage: pixelproof compare --design <PATH> --rendered <PATH> [--tolerance <F64>]
//!        [--key-policy namespaced|flat] [--format text|json] [--fail-on-mismatch]
//!
//! Either path may be `-` to read standard input. A file whose content is
//! `null` (or empty) stands for "no fingerprint captured".

use super::{is_stdin, read_input, Outcome};
use clap::{Args, ValueEnum};
use pixelproof_core::compare::{render_human_summary, Comparator, Comparison, KeyPolicy};
use pixelproof_core::config::PixelProofConfig;
use pixelproof_core::errors::{ExError, ExErrorKind};
use pixelproof_core::fingerprint::{parse_optional_fingerprint, Fingerprint};
use pixelproof_core::{log_op_end, log_op_error, log_op_start};
use pixelproof_core_types::RunId;
use std::path::{Path, PathBuf};

const OP: &str = "cli_compare";

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Design fingerprint JSON file (`-` for stdin)
    #[arg(long)]
    pub design: PathBuf,

    /// Rendered fingerprint JSON file (`-` for stdin)
    #[arg(long)]
    pub rendered: PathBuf,

    /// Numeric and color channel tolerance (overrides config)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Report key policy: namespaced or flat (overrides config)
    #[arg(long)]
    pub key_policy: Option<KeyPolicy>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 2 when any property mismatches
    #[arg(long)]
    pub fail_on_mismatch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown summary table
    Text,
    /// Structured comparison JSON
    Json,
}

/// Execute compare command
pub fn execute(
    args: CompareArgs,
    config: &PixelProofConfig,
    run_id: &RunId,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    log_op_start!(
        OP,
        run_id = run_id.as_str(),
        design = %args.design.display(),
        rendered = %args.rendered.display()
    );
    let start = std::time::Instant::now();

    let comparison = run(&args, config).map_err(|e| {
        let e = e.with_run_id(run_id.clone());
        log_op_error!(
            OP,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    match args.format {
        OutputFormat::Text => print!("{}", render_human_summary(&comparison)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
    }

    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        compared = comparison.is_compared()
    );

    let has_mismatches = comparison
        .report()
        .map(|report| !report.is_clean())
        .unwrap_or(false);
    if args.fail_on_mismatch && has_mismatches {
        return Ok(Outcome::MismatchesFound);
    }
    Ok(Outcome::Success)
}

fn run(args: &CompareArgs, config: &PixelProofConfig) -> Result<Comparison, ExError> {
    if is_stdin(&args.design) && is_stdin(&args.rendered) {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op(OP)
            .with_message("only one of --design and --rendered may read from stdin"));
    }

    let mut comparator_config = config.comparator;
    if let Some(tolerance) = args.tolerance {
        comparator_config.tolerance = tolerance;
    }
    if let Some(key_policy) = args.key_policy {
        comparator_config.key_policy = key_policy;
    }
    let comparator = Comparator::new(comparator_config)?;

    let design = load_fingerprint(&args.design, "design")?;
    let rendered = load_fingerprint(&args.rendered, "rendered")?;

    Ok(comparator.compare(design.as_ref(), rendered.as_ref()))
}

fn load_fingerprint(path: &Path, side: &str) -> Result<Option<Fingerprint>, ExError> {
    let text = read_input(path)?;
    parse_optional_fingerprint(&text).map_err(|e| {
        let message = format!("{} fingerprint: {}", side, e.message());
        e.with_message(message)
    })
}
