//! Result builder: JSON parse, path normalization, filtering, sorting.
//!
//! Consumes the captured linter output and produces `FileReport`s ready for
//! printing. Files with no issues never survive; the rest sort by total
//! issue count descending, ties keeping the linter's emit order.

use crate::cli::FilterMode;
use crate::errors::RankError;
use crate::models::eslint::FileEntry;
use crate::models::{FileReport, Message, Severity};
use std::path::Path;

/// Parse captured linter output and build the filtered, sorted report list.
///
/// `cwd` is stripped as a prefix from each reported absolute path so the
/// report shows repository-relative paths.
pub fn build_reports(
    raw: &str,
    cwd: &Path,
    filter: FilterMode,
) -> Result<Vec<FileReport>, RankError> {
    let entries: Vec<FileEntry> = serde_json::from_str(raw)?;
    let prefix = format!("{}/", cwd.to_string_lossy());

    let mut reports: Vec<FileReport> = Vec::new();
    for entry in entries {
        let total = entry.error_count + entry.warning_count;
        if total == 0 {
            continue;
        }
        let path = entry
            .file_path
            .strip_prefix(&prefix)
            .unwrap_or(&entry.file_path)
            .to_string();
        if !should_include(&path, filter) {
            continue;
        }
        let messages = entry
            .messages
            .into_iter()
            .map(|m| Message {
                line: m.line,
                column: m.column,
                severity: Severity::from_wire(m.severity),
                text: m.message,
                rule_id: m.rule_id,
            })
            .collect();
        reports.push(FileReport {
            path,
            errors: entry.error_count,
            warnings: entry.warning_count,
            total,
            messages,
        });
    }

    // Stable sort keeps the linter's relative order for equal totals.
    reports.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(reports)
}

/// Substring heuristic for test files, kept deliberately permissive.
fn is_test_path(path: &str) -> bool {
    path.contains("/test") || path.contains(".test.") || path.contains(".spec.")
}

/// Decide whether `path` participates under the given filter mode.
pub fn should_include(path: &str, filter: FilterMode) -> bool {
    match filter {
        FilterMode::All => true,
        FilterMode::Test => is_test_path(path),
        FilterMode::Src => !is_test_path(path),
    }
}
