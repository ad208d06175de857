/// Maximum number of characters kept from an opening line.
pub const SNIPPET_CHARS: usize = 50;

/// An opener still waiting for its closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    pub line: usize,
    pub snippet: String,
}

impl OpenTag {
    pub fn new(line: usize, trimmed: &str) -> Self {
        OpenTag {
            line,
            snippet: trimmed.chars().take(SNIPPET_CHARS).collect(),
        }
    }
}

/// A closer seen while nothing was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedClose {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub lines: usize,
    pub openers: usize,
    pub closers: usize,
    pub matched: usize,
}

impl LineCounts {
    pub fn unmatched_closers(&self) -> usize {
        self.closers - self.matched
    }
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub tag: &'static str,
    /// Oldest first.
    pub unclosed: Vec<OpenTag>,
    pub unexpected: Vec<UnexpectedClose>,
    pub counts: LineCounts,
}

impl ScanReport {
    pub fn unclosed_count(&self) -> usize {
        self.unclosed.len()
    }

    /// The most recently opened `limit` survivors, still in stack order.
    pub fn recent_unclosed(&self, limit: usize) -> &[OpenTag] {
        let start = self.unclosed.len().saturating_sub(limit);
        &self.unclosed[start..]
    }
}
