//! Report rendering.
//!
//! `render_report` is pure and returns the full report text so tests can
//! assert on exact output; the printing wrapper just writes it to stdout.
//! Color only styles text, never changes content or ordering.

use crate::cli::FilterMode;
use crate::models::{FileReport, Message, Severity};
use owo_colors::OwoColorize;

/// How many ranked entries the summary section shows at most.
const SUMMARY_LIMIT: usize = 20;

/// Print the full report to stdout.
pub fn print_report(reports: &[FileReport], mode: FilterMode, detail: usize, color: bool) {
    print!("{}", render_report(reports, mode, detail, color));
}

/// Render the complete report: header, ranked summary, overflow notice,
/// detail section for the top `detail` files, and the trailing usage block.
pub fn render_report(
    reports: &[FileReport],
    mode: FilterMode,
    detail: usize,
    color: bool,
) -> String {
    let mut out = String::new();

    let header = format!(
        "{} sorted by issue count ({} files with issues):",
        mode.description(),
        reports.len()
    );
    if color {
        out.push_str(&format!("\n{}\n\n", header.bold()));
    } else {
        out.push_str(&format!("\n{}\n\n", header));
    }

    for (i, report) in reports.iter().take(SUMMARY_LIMIT).enumerate() {
        if color {
            out.push_str(&format!("{:2}. {}\n", i + 1, report.path.bold()));
        } else {
            out.push_str(&format!("{:2}. {}\n", i + 1, report.path));
        }
        out.push_str(&format!(
            "    {} errors, {} warnings ({} total)\n",
            report.errors, report.warnings, report.total
        ));
    }
    if reports.len() > SUMMARY_LIMIT {
        out.push_str(&format!(
            "\n... and {} more files with issues\n",
            reports.len() - SUMMARY_LIMIT
        ));
    }

    let rule = "=".repeat(80);
    out.push_str(&format!("\n{}\n", rule));
    out.push_str(&format!("DETAILED ERRORS FOR TOP {} FILES:\n", detail));
    out.push_str(&format!("{}\n\n", rule));

    // The detail cutoff is independent of the summary cutoff.
    for (i, report) in reports.iter().take(detail).enumerate() {
        out.push_str(&format!(
            "{}. {} ({} issues)\n",
            i + 1,
            report.path,
            report.total
        ));
        out.push_str(&format!("{}\n", "-".repeat(report.path.len() + 20)));

        let errors: Vec<&Message> = report
            .messages
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .collect();
        let warnings: Vec<&Message> = report
            .messages
            .iter()
            .filter(|m| m.severity == Severity::Warning)
            .collect();

        if !errors.is_empty() {
            out.push_str(&format!("  ERRORS ({}):\n", errors.len()));
            for msg in &errors {
                out.push_str(&format_message(msg, color));
            }
            out.push('\n');
        }
        if !warnings.is_empty() {
            out.push_str(&format!("  WARNINGS ({}):\n", warnings.len()));
            for msg in &warnings {
                out.push_str(&format_message(msg, color));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("\nUsage: lintrank [src|test|all] [number_of_detailed_files]\n");
    out.push_str(&format!(
        "Current filter: {}, showing details for top {} files\n",
        mode, detail
    ));
    out.push_str("Examples:\n");
    out.push_str("  lintrank src 5    # Show top 5 source files with full details\n");
    out.push_str("  lintrank test     # Show top 10 test files with full details\n");
    out.push_str("  lintrank all 3    # Show top 3 files (any type) with full details\n");

    out
}

/// One finding line: `<line>:<column>  <severity>  <text>` plus the ruleId
/// when present and non-empty.
fn format_message(msg: &Message, color: bool) -> String {
    let word = if color {
        match msg.severity {
            Severity::Error => msg.severity.word().red().bold().to_string(),
            Severity::Warning => msg.severity.word().yellow().bold().to_string(),
        }
    } else {
        msg.severity.word().to_string()
    };
    let rule = msg
        .rule_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(|id| format!("  {}", id))
        .unwrap_or_default();
    format!(
        "    {}:{}  {}  {}{}\n",
        msg.line, msg.column, word, msg.text, rule
    )
}
