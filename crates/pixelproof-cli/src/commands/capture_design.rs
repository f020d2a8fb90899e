//! Capture-design command
//!
//! Usage: pixelproof capture-design --input <NODE_JSON>

use super::{read_input, Outcome};
use clap::Args;
use pixelproof_core::capture::{design_fingerprint, DesignNode};
use pixelproof_core::errors::{ExError, ExErrorKind};
use pixelproof_core::{log_op_end, log_op_error, log_op_start};
use pixelproof_core_types::RunId;
use std::path::PathBuf;

const OP: &str = "cli_capture_design";

#[derive(Debug, Args)]
pub struct CaptureDesignArgs {
    /// JSON description of the selected design node (`-` for stdin)
    #[arg(long)]
    pub input: PathBuf,
}

/// Execute capture-design command
pub fn execute(
    args: CaptureDesignArgs,
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

fn capture(args: &CaptureDesignArgs) -> Result<String, ExError> {
    let text = read_input(&args.input)?;
    let node: DesignNode = serde_json::from_str(&text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op(OP)
            .with_message(format!("design node is not valid JSON: {}", e))
    })?;

    let fingerprint = design_fingerprint(&node);
    Ok(serde_json::to_string_pretty(&fingerprint)?)
}
