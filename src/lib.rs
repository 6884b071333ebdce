//! Java Pre-Check
//!
//! A fast, heuristic syntax pre-validator for beginner Java code.
//!
//! This library provides:
//! - Line scanning and classification
//! - Heuristic validation (delimiters, declarations, semicolons, misspellings)
//! - LSP protocol implementation
//! - Configuration management

pub mod config;
pub mod lsp;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, Settings};
pub use validation::{Diagnostic, Dictionary, RuleOptions, ValidationResult, Validator, validate};
