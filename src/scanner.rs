use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::formatters::text;
use crate::tags::{DIV, LineKind, TagPair};
use crate::types::{LineCounts, OpenTag, ScanReport, UnexpectedClose};

const MMAP_THRESHOLD: u64 = 4 * 1024 * 1024;
const CHUNK: usize = 8192;

/// Stack of open tags fed one line at a time.
#[derive(Debug)]
pub struct Scanner {
    tags: TagPair,
    stack: Vec<OpenTag>,
    unexpected: Vec<UnexpectedClose>,
    counts: LineCounts,
}

impl Scanner {
    pub fn new(tags: TagPair) -> Self {
        Scanner {
            tags,
            stack: Vec::new(),
            unexpected: Vec::new(),
            counts: LineCounts::default(),
        }
    }

    /// Consumes the next line (1-based numbering is implicit). Returns the
    /// diagnostic when the line is a closer with nothing open.
    pub fn push_line(&mut self, raw: &str) -> Option<&UnexpectedClose> {
        self.counts.lines += 1;
        let line = self.counts.lines;
        let trimmed = trim_line(raw);
        match self.tags.classify(trimmed) {
            LineKind::Opener => {
                self.counts.openers += 1;
                self.stack.push(OpenTag::new(line, trimmed));
                None
            }
            LineKind::Closer => {
                self.counts.closers += 1;
                if self.stack.pop().is_some() {
                    self.counts.matched += 1;
                    return None;
                }
                self.unexpected.push(UnexpectedClose {
                    line,
                    text: trimmed.to_string(),
                });
                self.unexpected.last()
            }
            LineKind::Other => None,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn finish(self) -> ScanReport {
        ScanReport {
            tag: self.tags.name,
            unclosed: self.stack,
            unexpected: self.unexpected,
            counts: self.counts,
        }
    }
}

/// Scans a file and prints diagnostics plus the summary to stdout.
/// Returns the number of unclosed openers.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or stdout cannot be written.
pub fn scan(path: &Path) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = scan_to(path, &mut out)?;
    Ok(report.unclosed_count())
}

/// Like [`scan`], but writes to `out` and returns the whole report.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or `out` cannot be written.
pub fn scan_to<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<ScanReport> {
    let report = scan_file(path, out)?;
    writeln!(out, "{}", text::summary(&report))
        .with_context(|| format!("write report for: {}", path.display()))?;
    Ok(report)
}

/// Scans a file for `<div>` balance, streaming unexpected closers to `out`.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn scan_file<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<ScanReport> {
    let file = File::open(path).with_context(|| format!("open file: {}", path.display()))?;
    if let Ok(meta) = file.metadata() {
        if meta.len() >= MMAP_THRESHOLD {
            // Safety: read-only map; the file is not mutated while mapped
            if let Ok(mmap) = unsafe { memmap2::Mmap::map(&file) } {
                let mut rdr = io::Cursor::new(&mmap[..]);
                return scan_reader(&mut rdr, path, out);
            }
        }
    }
    let mut reader = BufReader::new(file);
    scan_reader(&mut reader, path, out)
}

/// Scans any buffered reader. Lines end at `\n`, `\r\n` or a lone `\r`;
/// invalid UTF-8 is decoded lossily.
///
/// # Errors
/// Returns an error if reading from the reader or writing to `out` fails.
pub fn scan_reader<R, W>(reader: &mut R, path_hint: &Path, out: &mut W) -> Result<ScanReport>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut scanner = Scanner::new(DIV);
    let mut buf = vec![0u8; CHUNK];
    let mut pending: Vec<u8> = Vec::new();
    let mut skip_lf = false;
    loop {
        let n = match io::Read::read(reader, &mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).with_context(|| format!("read: {}", path_hint.display())),
        };
        if n == 0 {
            if !pending.is_empty() {
                feed_line(&mut scanner, &pending, out, path_hint)?;
                pending.clear();
            }
            break;
        }
        let chunk = &buf[..n];
        let mut start = 0;
        // `\r\n` split across two reads: the `\n` belongs to the line already fed
        if skip_lf && chunk[0] == b'\n' {
            start = 1;
        }
        skip_lf = false;
        for i in memchr::memchr2_iter(b'\n', b'\r', chunk) {
            if i < start {
                continue;
            }
            if pending.is_empty() {
                feed_line(&mut scanner, &chunk[start..i], out, path_hint)?;
            } else {
                pending.extend_from_slice(&chunk[start..i]);
                feed_line(&mut scanner, &pending, out, path_hint)?;
                pending.clear();
            }
            start = i + 1;
            if chunk[i] == b'\r' {
                match chunk.get(i + 1).copied() {
                    Some(b'\n') => start = i + 2,
                    None => skip_lf = true,
                    Some(_) => {}
                }
            }
        }
        if start < chunk.len() {
            pending.extend_from_slice(&chunk[start..]);
        }
    }
    Ok(scanner.finish())
}

/// Strips Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn feed_line<W: Write + ?Sized>(
    scanner: &mut Scanner,
    raw: &[u8],
    out: &mut W,
    path_hint: &Path,
) -> Result<()> {
    let line = String::from_utf8_lossy(raw);
    let tag = scanner.tags.name;
    if let Some(u) = scanner.push_line(&line) {
        writeln!(out, "{}", text::unexpected_close(tag, u))
            .with_context(|| format!("write report for: {}", path_hint.display()))?;
    }
    Ok(())
}
