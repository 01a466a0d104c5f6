//! lintrank core library.
//!
//! Shells out to ESLint, parses its JSON output, and prints files ranked by
//! issue count with full diagnostics for the worst offenders.
//!
//! High-level modules:
//! - `cli`: CLI frame and shape-based option recognition (binary uses this).
//! - `runner`: External linter invocation with captured output.
//! - `report`: Result building — parse, normalize paths, filter, sort.
//! - `models`: Domain records plus the ESLint wire schema.
//! - `output`: Report rendering and printing.
//! - `errors`: Recovered failure kinds and their exit codes.
//! - `utils`: Supporting helpers.

pub mod cli;
pub mod errors;
pub mod models;
pub mod output;
pub mod report;
pub mod runner;
pub mod utils;

use cli::Options;
use errors::RankError;

/// Run one full invocation: lint, build reports, print.
///
/// Empty captured output means the linter produced nothing to report; the
/// run succeeds without printing anything. All other failures surface as a
/// `RankError` for the caller to map to an exit code.
pub fn run(opts: &Options) -> Result<(), RankError> {
    let captured = runner::run_eslint()?;
    if captured.stdout.is_empty() {
        return Ok(());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| RankError::Unexpected(format!("cannot resolve working directory: {e}")))?;
    let reports = report::build_reports(&captured.stdout, &cwd, opts.filter)?;
    output::print_report(&reports, opts.filter, opts.detail, utils::use_colors());
    Ok(())
}
