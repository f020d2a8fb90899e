//! Human-readable summary renderer for comparison results.

use crate::compare::model::{Comparison, DiffReport, MissingSide};
use crate::fingerprint::LeafValue;

const ABSENT_MARK: &str = "—";

/// Render a Markdown summary of a [`Comparison`].
///
/// Mismatches are listed before matches. The summary is informational only
/// and does not affect the structured result.
pub fn render_human_summary(comparison: &Comparison) -> String {
    let mut out = String::new();
    out.push_str("## Style Check\n\n");

    match comparison {
        Comparison::NothingToCompare { missing } => {
            out.push_str(&format!("_{}_\n", no_baseline_message(*missing)));
        }
        Comparison::Compared { report } => render_report(report, &mut out),
    }

    out
}

fn render_report(report: &DiffReport, out: &mut String) {
    out.push_str(&format!(
        "**Matches**: {} | **Mismatches**: {}  \n**Tolerance**: {}\n\n",
        report.matches.count,
        report.mismatches.count,
        format_number(report.tolerance)
    ));

    if report.total() == 0 {
        out.push_str("_Design fingerprint has no properties to check._\n");
        return;
    }

    out.push_str("| Property | Design | Rendered | Status |\n");
    out.push_str("|---|---|---|---|\n");

    for (key, mismatch) in &report.mismatches.properties {
        out.push_str(&format!(
            "| {} | {} | {} | ✘ |\n",
            table_cell(&key.to_string()),
            table_cell(&format_leaf(&mismatch.expected)),
            table_cell(&format_leaf(&mismatch.actual))
        ));
    }

    for (key, value) in &report.matches.properties {
        let shown = table_cell(&format_leaf(value));
        out.push_str(&format!(
            "| {} | {} | {} | ✔ |\n",
            table_cell(&key.to_string()),
            shown,
            shown
        ));
    }
}

/// Escape text for a single Markdown table cell.
fn table_cell(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}

fn no_baseline_message(missing: MissingSide) -> &'static str {
    match missing {
        MissingSide::Design => {
            "No design fingerprint available. Select a node in the design tool, then compare again."
        }
        MissingSide::Rendered => {
            "No rendered fingerprint available. Pick an element on the page, then compare again."
        }
        MissingSide::Both => "Neither a design nor a rendered fingerprint is available.",
    }
}

/// Format a leaf for display in summary tables.
pub fn format_leaf(value: &LeafValue) -> String {
    match value {
        LeafValue::Absent => ABSENT_MARK.to_string(),
        LeafValue::Number(n) => format_number(*n),
        LeafValue::Text(s) => s.clone(),
        LeafValue::Color(c) => c.to_string(),
    }
}

fn format_number(n: f64) -> String {
    // f64 Display already drops a trailing ".0"
    n.to_string()
}
