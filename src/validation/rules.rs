//! Heuristic Checks
//!
//! Each check appends to a `ValidationResult`; none of them can fail.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::lexer::{char_len, find_column, split_words, strip_non_word};
use crate::parser::SourceLine;
use crate::validation::engine::ValidationResult;
use crate::validation::misspellings::Dictionary;

/// Substrings that mark a line as structural, so it never needs a semicolon
const NO_SEMICOLON_MARKERS: &[&str] = &[
    "class ",
    "public ",
    "private ",
    "protected ",
    "static ",
    "import ",
    "package ",
    "if ",
    "else",
    "for ",
    "while ",
    "do ",
    "switch ",
    "try ",
    "catch ",
    "finally",
    "case ",
    "default:",
    "break",
    "continue",
    "return",
    "throw",
    "synchronized",
    "volatile",
    "transient",
    "native",
    "abstract",
    "final",
    "interface ",
    "enum ",
    "extends ",
    "implements ",
    "throws ",
    "@",
];

/// Substrings that make a line look like a statement
const STATEMENT_MARKERS: &[&str] = &["System.out.print", "=", "return", "++", "--"];

/// `<word> <word>`, e.g. a declaration such as `int x`
static DECLARATION_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Za-z0-9_]+\s+[A-Za-z0-9_]+").expect("valid declaration regex")
});

/// Anything parenthesized, e.g. a method call
static CALL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("valid call regex"));

const PRINTLN: &str = "System.out.println";
const MAIN_DECLARATION: &str = "public static void main";

/// One delimiter family checked for balance
struct Delimiter {
    open: char,
    close: char,
    singular: &'static str,
    plural: &'static str,
    message: &'static str,
}

const DELIMITERS: [Delimiter; 3] = [
    Delimiter {
        open: '{',
        close: '}',
        singular: "brace",
        plural: "braces",
        message: "Unbalanced braces",
    },
    Delimiter {
        open: '(',
        close: ')',
        singular: "parenthesis",
        plural: "parentheses",
        message: "Unbalanced parentheses",
    },
    Delimiter {
        open: '[',
        close: ']',
        singular: "bracket",
        plural: "brackets",
        message: "Unbalanced brackets",
    },
];

/// Whole-text check for a class declaration
///
/// Two overlapping checks: a bare `class` anywhere, and `class ` followed by a name.
pub fn check_class_declaration(source: &str, result: &mut ValidationResult) {
    if !source.contains("class") {
        result.add(
            1,
            1,
            "Missing class declaration",
            "Every Java program needs a class. Start with something like 'public class Main {'.",
        );
    }

    if !source.contains("class ") && !source.contains("public class ") {
        result.add(
            1,
            1,
            "Invalid class structure",
            "A class is declared with the 'class' keyword followed by a name, \
             for example 'public class Main'.",
        );
    }
}

/// Whole-text check for a `main` entry point
pub fn check_main_method(source: &str, result: &mut ValidationResult) {
    if !source.contains(MAIN_DECLARATION) && !source.contains("static void main") {
        result.add(
            1,
            1,
            "Missing main method",
            "The program needs an entry point: \
             'public static void main(String[] args) { ... }' inside your class.",
        );
    }
}

/// Whole-text balance of braces, parentheses and brackets
///
/// Delimiters inside strings and comments are counted too. Every imbalance is
/// reported at line 1.
pub fn check_delimiters(source: &str, result: &mut ValidationResult) {
    for delimiter in &DELIMITERS {
        let (opens, closes) = source.chars().fold((0usize, 0usize), |(o, c), ch| {
            if ch == delimiter.open {
                (o + 1, c)
            } else if ch == delimiter.close {
                (o, c + 1)
            } else {
                (o, c)
            }
        });

        if opens == closes {
            continue;
        }

        let (missing, direction) = if opens > closes {
            (opens - closes, "closing")
        } else {
            (closes - opens, "opening")
        };
        let noun = if missing == 1 {
            delimiter.singular
        } else {
            delimiter.plural
        };

        result.add(
            1,
            1,
            delimiter.message,
            format!(
                "Missing {missing} {direction} {noun}. Every '{}' needs a matching '{}'.",
                delimiter.open, delimiter.close
            ),
        );
    }
}

/// Whether a trimmed code line looks like a statement that lacks its `;`
pub fn needs_semicolon(code: &str) -> bool {
    if code.ends_with('{') || code.ends_with('}') || code.ends_with(';') {
        return false;
    }

    if NO_SEMICOLON_MARKERS.iter().any(|m| code.contains(m)) {
        return false;
    }

    STATEMENT_MARKERS.iter().any(|m| code.contains(m))
        || DECLARATION_SHAPE.is_match(code)
        || (CALL_SHAPE.is_match(code) && !code.contains('{'))
}

/// Statement termination, print call and declaration shape checks for one line
///
/// `brace_follows` reports whether the next code line opens with `{`; it only
/// matters when the caller allows braces on the following line.
pub fn check_line(
    line: &SourceLine<'_>,
    code: &str,
    brace_follows: bool,
    result: &mut ValidationResult,
) {
    let end_column = char_len(line.text);

    if needs_semicolon(code) {
        result.add(
            line.number,
            end_column,
            "Missing semicolon",
            "Java statements end with ';'. Add a semicolon at the end of this line.",
        );
    }

    if code.contains(PRINTLN) && !code.contains('(') {
        result.add(
            line.number,
            find_column(line.text, PRINTLN).unwrap_or(0),
            "Malformed print statement",
            "System.out.println needs parentheses around what it prints, \
             for example System.out.println(\"Hello\");",
        );
    }

    if code.contains(MAIN_DECLARATION) && !code.contains("String[] args") {
        result.add(
            line.number,
            find_column(line.text, MAIN_DECLARATION).unwrap_or(0),
            "Incorrect main method signature",
            "The main method must be declared as 'public static void main(String[] args)'.",
        );
    }

    if code.contains("public class") && !code.contains('{') && !brace_follows {
        result.add(
            line.number,
            end_column,
            "Missing opening brace after class declaration",
            "A class body starts with '{' right after the class name, \
             for example 'public class Main {'.",
        );
    }

    if code.contains(MAIN_DECLARATION) && !code.contains('{') && !brace_follows {
        result.add(
            line.number,
            end_column,
            "Missing opening brace after main method declaration",
            "The main method body starts with '{' right after its parameter list.",
        );
    }
}

/// Report words that match a known misspelling
pub fn check_misspellings(
    line: &SourceLine<'_>,
    dictionary: &Dictionary,
    result: &mut ValidationResult,
) {
    for word in split_words(line.text) {
        let cleaned = strip_non_word(word.text);
        if cleaned.is_empty() {
            continue;
        }

        if let Some(correction) = dictionary.suggestion(&cleaned) {
            result.add(
                line.number,
                word.column,
                format!("Possible misspelling: '{cleaned}'"),
                format!("Did you mean '{correction}'?"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_lines;

    fn line_diagnostics(text: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let line = parse_lines(text).next().expect("one line");
        let code = line.code().expect("code line");
        check_line(&line, code, false, &mut result);
        check_misspellings(&line, &Dictionary::builtin(), &mut result);
        result
    }

    #[test]
    fn test_needs_semicolon_for_assignment() {
        assert!(needs_semicolon("int x = 5"));
        assert!(needs_semicolon("count++"));
        assert!(needs_semicolon("doSomething()"));
        assert!(needs_semicolon("String name"));
    }

    #[test]
    fn test_no_semicolon_for_structure() {
        assert!(!needs_semicolon("int x = 5;"));
        assert!(!needs_semicolon("public class Main {"));
        assert!(!needs_semicolon("}"));
        assert!(!needs_semicolon("if (x > 0)"));
        assert!(!needs_semicolon("return x"));
        assert!(!needs_semicolon("@Override"));
        assert!(!needs_semicolon("else"));
        assert!(!needs_semicolon("x"));
    }

    #[test]
    fn test_call_with_brace_is_not_a_statement() {
        // `{` inside the line but not at the end, e.g. an array initializer
        assert!(!needs_semicolon("foo() { bar"));
    }

    #[test]
    fn test_missing_semicolon_column_is_line_length() {
        let result = line_diagnostics("        int x = 5");

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, "Missing semicolon");
        assert_eq!(result.diagnostics[0].column, 17);
    }

    #[test]
    fn test_malformed_println() {
        let result = line_diagnostics("    System.out.println \"hi\";");

        let diag = result
            .diagnostics
            .iter()
            .find(|d| d.message == "Malformed print statement")
            .expect("malformed println diagnostic");
        assert_eq!(diag.column, 4);
    }

    #[test]
    fn test_main_signature_and_brace() {
        let result = line_diagnostics("  public static void main()");
        let messages: Vec<_> = result.diagnostics.iter().map(|d| d.message.as_str()).collect();

        assert_eq!(
            messages,
            vec![
                "Incorrect main method signature",
                "Missing opening brace after main method declaration"
            ]
        );
        assert_eq!(result.diagnostics[0].column, 2);
    }

    #[test]
    fn test_class_brace_on_same_line_only() {
        let result = line_diagnostics("public class Main");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "Missing opening brace after class declaration"
        );

        let mut allowed = ValidationResult::new();
        let line = parse_lines("public class Main").next().unwrap();
        check_line(&line, line.code().unwrap(), true, &mut allowed);
        assert!(allowed.is_valid());
    }

    #[test]
    fn test_each_misspelling_reported() {
        let result = line_diagnostics("pubic statc voyd mian() {");
        let suggestions: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| (d.column, d.explanation.as_str()))
            .collect();

        assert_eq!(
            suggestions,
            vec![
                (0, "Did you mean 'public'?"),
                (6, "Did you mean 'static'?"),
                (12, "Did you mean 'void'?"),
                (17, "Did you mean 'main'?"),
            ]
        );
    }

    #[test]
    fn test_dotted_call_is_one_word() {
        let result = line_diagnostics("Sytem.out.prntln(\"hi\");");
        assert!(result.is_valid());
    }

    #[test]
    fn test_delimiter_wording() {
        let mut result = ValidationResult::new();
        check_delimiters("{{ ( ]]]", &mut result);

        let explanations: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| d.explanation.as_str())
            .collect();
        assert!(explanations[0].starts_with("Missing 2 closing braces."));
        assert!(explanations[1].starts_with("Missing 1 closing parenthesis."));
        assert!(explanations[2].starts_with("Missing 3 opening brackets."));
        assert!(result.diagnostics.iter().all(|d| d.line == 1 && d.column == 1));
    }
}
