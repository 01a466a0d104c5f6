//! CLI argument parsing via `clap`.
//!
//! The clap frame only owns `--help`/`--version`; actual options are
//! recognized by token shape, not position, so `lintrank 5 src` and
//! `lintrank src 5` mean the same thing and junk tokens are ignored.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lintrank",
    version,
    about = "Rank ESLint findings by file",
    long_about = "lintrank — run ESLint over the server sources and print files ranked by issue count, with full diagnostics for the worst offenders.",
    after_help = "Examples:\n  lintrank src 5    # Show top 5 source files with full details\n  lintrank test     # Show top 10 test files with full details\n  lintrank all 3    # Show top 3 files (any type) with full details"
)]
/// Top-level CLI surface.
pub struct Cli {
    /// Filter mode (src|test|all) and/or detail count, in any order
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which files' diagnostics are considered.
pub enum FilterMode {
    All,
    Src,
    Test,
}

impl FilterMode {
    /// Case-insensitive token match; anything else is not a filter token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "all" => Some(FilterMode::All),
            "src" => Some(FilterMode::Src),
            "test" => Some(FilterMode::Test),
            _ => None,
        }
    }

    /// Human description used in the report header.
    pub fn description(&self) -> &'static str {
        match self {
            FilterMode::All => "All server files",
            FilterMode::Src => "Source files (excluding tests)",
            FilterMode::Test => "Test files only",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tok = match self {
            FilterMode::All => "all",
            FilterMode::Src => "src",
            FilterMode::Test => "test",
        };
        f.write_str(tok)
    }
}

#[derive(Debug, Clone, Copy)]
/// Effective options after scanning the token list.
pub struct Options {
    pub filter: FilterMode,
    /// How many top-ranked files get a full diagnostic listing.
    pub detail: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            filter: FilterMode::All,
            detail: 10,
        }
    }
}

impl Options {
    /// Scan tokens in order; each recognized shape reassigns its option, so
    /// the last matching token of each kind wins. Unrecognized tokens are
    /// ignored on purpose.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut opts = Options::default();
        for tok in tokens {
            let tok = tok.as_ref();
            if let Some(mode) = FilterMode::from_token(tok) {
                opts.filter = mode;
            } else if let Ok(n) = tok.parse::<usize>() {
                opts.detail = n;
            }
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::from_tokens::<&str>(&[]);
        assert_eq!(opts.filter, FilterMode::All);
        assert_eq!(opts.detail, 10);
    }

    #[test]
    fn test_order_is_irrelevant() {
        let a = Options::from_tokens(&["src", "5"]);
        let b = Options::from_tokens(&["5", "src"]);
        assert_eq!(a.filter, FilterMode::Src);
        assert_eq!(a.detail, 5);
        assert_eq!(b.filter, a.filter);
        assert_eq!(b.detail, a.detail);
    }

    #[test]
    fn test_case_insensitive_mode() {
        assert_eq!(Options::from_tokens(&["TEST"]).filter, FilterMode::Test);
        assert_eq!(Options::from_tokens(&["Src"]).filter, FilterMode::Src);
    }

    #[test]
    fn test_last_matching_token_wins() {
        let opts = Options::from_tokens(&["src", "test", "3", "7"]);
        assert_eq!(opts.filter, FilterMode::Test);
        assert_eq!(opts.detail, 7);
    }

    #[test]
    fn test_junk_tokens_are_ignored() {
        let opts = Options::from_tokens(&["bogus", "srcish", "1x", "-3"]);
        assert_eq!(opts.filter, FilterMode::All);
        assert_eq!(opts.detail, 10);
    }

    #[test]
    fn test_zero_detail_count() {
        assert_eq!(Options::from_tokens(&["0"]).detail, 0);
    }
}
