//! Capture-rendered command
//!
//! Usage: pixelproof capture-rendered --input <COMPUTED_STYLE_JSON>

use super::{read_input, Outcome};
use clap::Args;
use pixelproof_core::capture::{rendered_fingerprint, ComputedStyle};
use pixelproof_core::errors::{ExError, ExErrorKind};
use pixelproof_core::{log_op_end, log_op_error, log_op_start};
use pixelproof_core_types::RunId;
use std::path::PathBuf;

const OP: &str = "cli_capture_rendered";

#[derive(Debug, Args)]
pub struct CaptureRenderedArgs {
    /// JSON object of camelCase CSS property names to computed values (`-` for stdin)
    #[arg(long)]
    pub input: PathBuf,
}

/// Execute capture-rendered command
pub fn execute(
    args: CaptureRenderedArgs,
    run_id: &RunId,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    log_op_start!(OP, run_id = run_id.as_str());
    let start = std::time::Instant::now();

    let json = capture(&args).map_err(|e| {
        let e = e.with_run_id(run_id.clone());
        log_op_error!(
            OP,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    println!("{}", json);
    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str()
    );
    Ok(Outcome::Success)
}

fn capture(args: &CaptureRenderedArgs) -> Result<String, ExError> {
    let text = read_input(&args.input)?;
    let style: ComputedStyle = serde_json::from_str(&text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op(OP)
            .with_message(format!(
                "computed style must be a JSON object of strings: {}",
                e
            ))
    })?;

    let fingerprint = rendered_fingerprint(&style);
    Ok(serde_json::to_string_pretty(&fingerprint)?)
}
