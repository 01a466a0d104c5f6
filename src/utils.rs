//! Supporting helpers: color gating and stderr diagnostic prefixes.

use owo_colors::OwoColorize;

/// Whether human output should be colorized. Honors `NO_COLOR`.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal diagnostics printed to stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        format!("{} {}", "✖".red(), "error:".red().bold())
    } else {
        "✖ error:".to_string()
    }
}
