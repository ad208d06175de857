use crate::types::{ScanReport, UnexpectedClose};

/// How many of the newest unclosed openers the summary lists.
pub const SUMMARY_LIMIT: usize = 10;

pub fn unexpected_close(tag: &str, u: &UnexpectedClose) -> String {
    format!("Unexpected closing {tag} at line {}: {}", u.line, u.text)
}

/// Blank line, header, then up to [`SUMMARY_LIMIT`] entries. No trailing newline.
pub fn summary(r: &ScanReport) -> String {
    let mut lines = Vec::with_capacity(SUMMARY_LIMIT + 2);
    lines.push(String::new());
    lines.push(format!("Unclosed {}s ({}):", r.tag, r.unclosed_count()));
    for open in r.recent_unclosed(SUMMARY_LIMIT) {
        lines.push(format!("Line {}: {}", open.line, open.snippet));
    }
    lines.join("\n")
}

pub fn total(r: &ScanReport) -> String {
    format!("\nTotal unclosed {}s: {}", r.tag, r.unclosed_count())
}
