//! Validation Engine
//!
//! Heuristic Java syntax checks, separated from scanning and LSP concerns.

pub mod engine;
pub mod misspellings;
pub mod rules;

pub use engine::{Diagnostic, RuleOptions, ValidationResult, Validator, validate};
pub use misspellings::Dictionary;
