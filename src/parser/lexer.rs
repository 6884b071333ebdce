//! Java Line Lexer
//!
//! Whitespace word splitting with column tracking.
//! No real Java tokenization: a "word" is any run of non-whitespace.

/// A whitespace-delimited word and where it starts on its line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Character offset of the first character of the word (0-based)
    pub column: usize,
}

/// Split a line into whitespace-delimited words
pub fn split_words(line: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (idx, ch)) in line.char_indices().enumerate() {
        if ch.is_whitespace() {
            if let Some((start_idx, start_col)) = start.take() {
                words.push(Word {
                    text: &line[start_idx..idx],
                    column: start_col,
                });
            }
        } else if start.is_none() {
            start = Some((idx, column));
        }
    }

    if let Some((start_idx, start_col)) = start {
        words.push(Word {
            text: &line[start_idx..],
            column: start_col,
        });
    }

    words
}

/// Remove every character that is not an ASCII word character (`[A-Za-z0-9_]`)
pub fn strip_non_word(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Character column of the first occurrence of `needle`, if any
pub fn find_column(line: &str, needle: &str) -> Option<usize> {
    line.find(needle).map(|idx| line[..idx].chars().count())
}

/// Line length in characters
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}
