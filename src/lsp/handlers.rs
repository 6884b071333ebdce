use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::lsp::backend::Backend;
use crate::lsp::document::DocumentState;
use crate::parser::{parse_lines, split_words, strip_non_word};
use crate::validation::{Dictionary, ValidationResult};

/// Trait for handling hover requests
#[tower_lsp::async_trait]
pub trait HandleHover {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>>;
}

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn create_document_state(&self, content: String) -> DocumentState;
    async fn publish_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleHover for Backend {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let tdpp = params.text_document_position_params;
        let uri = tdpp.text_document.uri;
        let pos = tdpp.position;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let validator = self.validator.lock().await;
        let hover_text = hover_markdown(
            &doc_state.content,
            &doc_state.result,
            validator.dictionary(),
            pos,
        );

        Ok(hover_text.map(|value| Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            range: None,
        }))
    }
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Validate content and cache the result alongside it
    async fn create_document_state(&self, content: String) -> DocumentState {
        let validator = self.validator.lock().await;
        let result = validator.validate(&content);

        DocumentState { content, result }
    }

    /// Publish diagnostics for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let diagnostics = to_lsp_diagnostics(&doc_state.content, &doc_state.result);
        drop(docs);

        log::debug!("publishing {} diagnostics for {}", diagnostics.len(), uri);
        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let mut symbols = Vec::new();

        for line in parse_lines(&doc_state.content) {
            let Some(code) = line.code() else {
                continue;
            };
            let Some((name, kind)) = declaration_symbol(code) else {
                continue;
            };

            let line_idx = (line.number - 1) as u32;
            let range = Range::new(
                Position::new(line_idx, 0),
                Position::new(line_idx, line.text.chars().count() as u32),
            );

            #[allow(deprecated)]
            let symbol = DocumentSymbol {
                detail: Some(code.to_string()),
                name,
                kind,
                tags: None,
                deprecated: None,
                range,
                selection_range: range,
                children: None,
            };
            symbols.push(symbol);
        }

        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

/// Convert validation output into LSP diagnostics
///
/// Ranges run from the reported column to the end of the line, clamped to
/// the line's length.
pub fn to_lsp_diagnostics(
    content: &str,
    result: &ValidationResult,
) -> Vec<tower_lsp::lsp_types::Diagnostic> {
    let line_lengths: Vec<usize> = content.lines().map(|l| l.chars().count()).collect();

    result
        .diagnostics
        .iter()
        .map(|d| {
            let line_idx = d.line.saturating_sub(1);
            let line_len = line_lengths.get(line_idx).copied().unwrap_or(0);
            let start = Position::new(line_idx as u32, d.column.min(line_len) as u32);
            let end = Position::new(line_idx as u32, line_len as u32);

            tower_lsp::lsp_types::Diagnostic::new(
                Range::new(start, end),
                Some(DiagnosticSeverity::ERROR),
                None,
                Some("java-precheck".to_string()),
                format!("{}\n{}", d.message, d.explanation),
                None,
                None,
            )
        })
        .collect()
}

/// Hover text for a position: diagnostics on that line and any misspelling under the cursor
pub fn hover_markdown(
    content: &str,
    result: &ValidationResult,
    dictionary: &Dictionary,
    pos: Position,
) -> Option<String> {
    let line_idx = pos.line as usize;
    let line = content.lines().nth(line_idx)?;
    let char_idx = pos.character as usize;

    let mut sections = Vec::new();

    let word_under_cursor = split_words(line)
        .into_iter()
        .find(|w| (w.column..w.column + w.text.chars().count()).contains(&char_idx));
    if let Some(word) = word_under_cursor {
        let cleaned = strip_non_word(word.text);
        if let Some(correction) = dictionary.suggestion(&cleaned) {
            sections.push(format!("**{}** → did you mean `{}`?", cleaned, correction));
        }
    }

    for diagnostic in result.on_line(line_idx + 1) {
        sections.push(format!(
            "**{}**\n\n{}",
            diagnostic.message, diagnostic.explanation
        ));
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n---\n\n"))
    }
}

/// Symbol for a class, interface, enum or main method declaration line
pub fn declaration_symbol(code: &str) -> Option<(String, SymbolKind)> {
    let words = split_words(code);

    for (idx, word) in words.iter().enumerate() {
        let kind = match word.text {
            "class" => SymbolKind::CLASS,
            "interface" => SymbolKind::INTERFACE,
            "enum" => SymbolKind::ENUM,
            _ => continue,
        };

        let name = words
            .get(idx + 1)
            .map(|w| strip_non_word(w.text))
            .filter(|n| !n.is_empty())?;
        return Some((name, kind));
    }

    if code.contains("static void main") {
        return Some(("main".to_string(), SymbolKind::METHOD));
    }

    None
}
