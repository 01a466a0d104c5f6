//! lintrank CLI binary entry point.
//! Parses options, runs the lint pass, and maps error kinds to exit codes.

use clap::Parser;
use lintrank::cli::{Cli, Options};
use lintrank::utils;

fn main() {
    let cli = Cli::parse();
    let opts = Options::from_tokens(&cli.tokens);
    if let Err(err) = lintrank::run(&opts) {
        eprintln!("{} {}", utils::error_prefix(), err);
        std::process::exit(err.exit_code());
    }
}
