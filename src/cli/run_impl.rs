use std::io::{self, Write};

use anyhow::{Context, Result};
use unclosed_divs::formatters::text;
use unclosed_divs::scanner;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    if args.verbose > 0 {
        eprintln!("Scanning file: {}", args.path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = scanner::scan_to(&args.path, &mut out)?;

    if args.verbose > 1 {
        let c = report.counts;
        eprintln!(
            "Lines: {}, openers={}, closers={}, matched={}, unmatched closers={}",
            c.lines,
            c.openers,
            c.closers,
            c.matched,
            c.unmatched_closers()
        );
    }

    writeln!(out, "{}", text::total(&report)).context("write total")?;
    Ok(())
}
