//! External linter invocation.
//!
//! Spawns ESLint once, blocking until it exits, and captures both output
//! streams as text. A non-zero exit status is normal for a linter that
//! found issues, so only a spawn/wait failure is an error.

use crate::errors::RankError;
use std::process::Command;

/// Program used to launch the linter.
pub const ESLINT_PROGRAM: &str = "npx";
/// Fixed linter arguments: target directory, extension filter, JSON output.
pub const ESLINT_ARGS: &[&str] = &["eslint", "server", "--ext", ".ts", "--format", "json"];

/// Captured output of one child process run.
#[derive(Debug)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
}

/// Run ESLint against the fixed target and capture its output.
pub fn run_eslint() -> Result<Captured, RankError> {
    capture(ESLINT_PROGRAM, ESLINT_ARGS)
}

/// Run `program args...` to completion, capturing stdout and stderr.
/// The child is waited on before this returns.
pub fn capture(program: &str, args: &[&str]) -> Result<Captured, RankError> {
    let out = Command::new(program)
        .args(args)
        .output()
        .map_err(RankError::Invocation)?;
    Ok(Captured {
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    })
}
