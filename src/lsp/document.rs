use crate::validation::ValidationResult;

/// State for each open document
#[derive(Debug)]
pub struct DocumentState {
    pub content: String,
    /// Diagnostics for `content`, kept for hover
    pub result: ValidationResult,
}
