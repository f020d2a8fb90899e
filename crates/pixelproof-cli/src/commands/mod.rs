//! Subcommand implementations

pub mod capture_design;
pub mod capture_rendered;
pub mod compare;

use pixelproof_core::errors::{ExError, PixelProofError};
use std::io::Read;
use std::path::Path;

/// Path argument that means "read standard input"
pub const STDIN_PATH: &str = "-";

/// How a successful command should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Comparison found mismatches and the caller asked to fail on them
    MismatchesFound,
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read a whole input file, or stdin for `-`
pub fn read_input(path: &Path) -> Result<String, ExError> {
    let read = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };

    read.map_err(|e| {
        ExError::from(PixelProofError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
        .with_op("read_input")
    })
}
