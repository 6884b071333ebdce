//! Keyword Misspelling Dictionary
//!
//! A fixed table of common beginner misspellings of Java keywords and core
//! identifiers, plus optional user-configured additions.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in misspellings, keyed by the lowercased wrong spelling
const BUILTIN_MISSPELLINGS: &[(&str, &str)] = &[
    ("clase", "class"),
    ("clas", "class"),
    ("calss", "class"),
    ("classs", "class"),
    ("pubic", "public"),
    ("pulbic", "public"),
    ("publc", "public"),
    ("pubilc", "public"),
    ("privte", "private"),
    ("pirvate", "private"),
    ("protcted", "protected"),
    ("statc", "static"),
    ("staic", "static"),
    ("sttic", "static"),
    ("voyd", "void"),
    ("viod", "void"),
    ("vod", "void"),
    ("mian", "main"),
    ("sytem", "System"),
    ("sysem", "System"),
    ("systm", "System"),
    ("ssytem", "System"),
    ("prntln", "println"),
    ("printn", "println"),
    ("pritnln", "println"),
    ("prinln", "println"),
    ("retrn", "return"),
    ("retun", "return"),
    ("reutrn", "return"),
    ("returm", "return"),
    ("strng", "String"),
    ("stirng", "String"),
    ("boolen", "boolean"),
    ("booelan", "boolean"),
    ("doubel", "double"),
    ("flase", "false"),
    ("ture", "true"),
    ("treu", "true"),
    ("nwe", "new"),
    ("esle", "else"),
    ("whiel", "while"),
    ("wihle", "while"),
    ("swich", "switch"),
    ("swtich", "switch"),
    ("braek", "break"),
    ("contine", "continue"),
    ("improt", "import"),
    ("extneds", "extends"),
    ("implments", "implements"),
    ("finaly", "finally"),
];

static BUILTIN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| BUILTIN_MISSPELLINGS.iter().copied().collect());

/// Lookup table from misspelled words to their correction
///
/// The built-in table is shared process-wide and never mutated. Additions
/// live in the dictionary value itself and take precedence over built-ins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    additions: HashMap<String, String>,
}

impl Dictionary {
    /// Dictionary with only the built-in entries
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Add entries on top of the built-in table; keys are lowercased
    pub fn with_additions<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (wrong, right) in entries {
            self.additions
                .insert(wrong.as_ref().to_lowercase(), right.into());
        }
        self
    }

    /// Suggested correction for a word, matched case-insensitively
    pub fn suggestion(&self, word: &str) -> Option<&str> {
        let key = word.to_lowercase();
        self.additions
            .get(&key)
            .map(String::as_str)
            .or_else(|| BUILTIN.get(key.as_str()).copied())
    }

    /// Number of distinct misspellings known
    pub fn entry_count(&self) -> usize {
        let extra = self
            .additions
            .keys()
            .filter(|k| !BUILTIN.contains_key(k.as_str()))
            .count();
        BUILTIN.len() + extra
    }
}
