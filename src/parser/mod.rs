//! Java Source Scanning
//!
//! Line splitting and classification for the heuristic checks.
//! Deliberately shallow: nothing here understands Java grammar.

pub mod lexer;
pub mod line;

pub use lexer::{Word, split_words, strip_non_word};
pub use line::{LineKind, SourceLine, classify_line};

/// Split source text into numbered, classified physical lines
///
/// Line numbers are 1-based. A trailing `\r` is dropped along with the newline.
pub fn parse_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    source.lines().enumerate().map(|(idx, text)| SourceLine {
        number: idx + 1,
        text,
        kind: classify_line(text),
    })
}
