/// A tracked element: its name and the literal line prefixes that open and close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPair {
    pub name: &'static str,
    pub open_prefix: &'static str,
    pub close_literal: &'static str,
}

/// The `<div>` pair. The opener has no word-boundary check, so `<divider>` opens too.
pub const DIV: TagPair = TagPair {
    name: "div",
    open_prefix: "<div",
    close_literal: "</div>",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Opener,
    Closer,
    Other,
}

impl TagPair {
    /// Classifies an already-trimmed line. Opener wins when both could apply.
    pub fn classify(&self, trimmed: &str) -> LineKind {
        if trimmed.starts_with(self.open_prefix) {
            LineKind::Opener
        } else if trimmed.starts_with(self.close_literal) {
            LineKind::Closer
        } else {
            LineKind::Other
        }
    }
}
