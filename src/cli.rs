use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

/// Page checked when no path is given.
pub const DEFAULT_TARGET: &str = "byk-admin/src/app/page.tsx";

#[derive(Parser, Debug, Clone)]
#[command(name = "unclosed-divs", version, about = "Report unbalanced <div> lines in a markup file", long_about = None)]
pub struct Args {
    /// File to scan
    #[arg(value_name = "PATH", default_value = DEFAULT_TARGET, value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// Verbose logging to stderr
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the target file cannot be read.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
