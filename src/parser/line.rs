//! Line classification
//!
//! Decides which physical lines the per-line checks look at.

/// What a physical line holds, as far as the heuristics care
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only
    Blank,
    /// Starts with `//`, `/*` or `*` once trimmed
    Comment,
    /// Anything else, carrying the trimmed text
    Code(&'a str),
}

/// A numbered physical line of a source text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// The untrimmed line
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

impl<'a> SourceLine<'a> {
    /// Trimmed text for code lines, `None` for blank and comment lines
    pub fn code(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Code(code) => Some(code),
            LineKind::Blank | LineKind::Comment => None,
        }
    }
}

/// Classify one line
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        LineKind::Comment
    } else {
        LineKind::Code(trimmed)
    }
}
