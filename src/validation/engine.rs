//! Validation Engine
//!
//! Runs the heuristic checks in a fixed order and collects every finding.
//! Validation never fails: problems are reported as diagnostics.

use serde::{Deserialize, Serialize};

use crate::parser::{LineKind, SourceLine, parse_lines};
use crate::validation::misspellings::Dictionary;
use crate::validation::rules;

/// One reported syntax issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// 0-based character column
    pub column: usize,
    pub message: String,
    pub explanation: String,
}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        line: usize,
        column: usize,
        message: impl Into<String>,
        explanation: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            line,
            column,
            message: message.into(),
            explanation: explanation.into(),
        });
    }

    /// Valid iff nothing was reported
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics reported on a given 1-based line
    pub fn on_line(&self, line: usize) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.line == line)
    }
}

/// Tunable rule behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Accept a class or main declaration whose `{` opens the next line
    pub next_line_braces: bool,
}

/// The syntax pre-validator
///
/// Holds only read-only data, so one instance can be shared freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    dictionary: Dictionary,
    options: RuleOptions,
}

impl Validator {
    pub fn new(dictionary: Dictionary, options: RuleOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }

    /// Validate a complete source text
    ///
    /// A leading byte-order mark is ignored.
    pub fn validate(&self, source: &str) -> ValidationResult {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let mut result = ValidationResult::new();

        if source.trim().is_empty() {
            result.add(
                1,
                1,
                "Empty code",
                "There is no code to check. Write a class with a main method first.",
            );
            return result;
        }

        rules::check_class_declaration(source, &mut result);
        rules::check_main_method(source, &mut result);
        rules::check_delimiters(source, &mut result);

        let lines: Vec<SourceLine<'_>> = parse_lines(source).collect();
        for (idx, line) in lines.iter().enumerate() {
            let Some(code) = line.code() else {
                continue;
            };

            let brace_follows =
                self.options.next_line_braces && next_line_opens_brace(&lines[idx + 1..]);
            rules::check_line(line, code, brace_follows, &mut result);
            rules::check_misspellings(line, &self.dictionary, &mut result);
        }

        log::debug!(
            "validated {} lines: {} diagnostics",
            lines.len(),
            result.diagnostics.len()
        );

        result
    }
}

/// Whether the first non-blank line after a declaration starts with `{`
fn next_line_opens_brace(rest: &[SourceLine<'_>]) -> bool {
    rest.iter()
        .find(|l| l.kind != LineKind::Blank)
        .and_then(|l| l.code())
        .is_some_and(|code| code.starts_with('{'))
}

/// Validate with the built-in dictionary and default rules
pub fn validate(source: &str) -> ValidationResult {
    Validator::default().validate(source)
}
