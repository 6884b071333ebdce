use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::lsp::document::DocumentState;
use crate::lsp::handlers::{HandleDiagnostics, HandleDocumentSymbol, HandleHover};
use crate::validation::Validator;
use crate::Config;

/// The main LSP backend that holds state and implements the Language Server Protocol
pub struct Backend {
    pub client: Client,
    pub validator: Arc<Mutex<Validator>>,
    pub documents: Arc<Mutex<HashMap<Url, DocumentState>>>,
    pub config: Config,
}

impl Backend {
    pub fn new(client: Client, config: Config) -> Self {
        let validator = Arc::new(Mutex::new(config.validator()));

        Self {
            client,
            validator,
            documents: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Reload settings for the client's workspace root
    async fn adopt_workspace(&self, root: &Url) {
        let Ok(root_path) = root.to_file_path() else {
            return;
        };

        match self.config.for_workspace(&root_path) {
            Ok(config) => {
                let validator = config.validator();
                log::info!(
                    "Workspace {}: {} misspellings, {:?}",
                    root_path.display(),
                    validator.dictionary().entry_count(),
                    validator.options()
                );
                if let Some(path) = &config.settings_path {
                    self.client
                        .log_message(
                            MessageType::INFO,
                            format!("java-precheck settings: {}", path.display()),
                        )
                        .await;
                }
                *self.validator.lock().await = validator;
            }
            Err(e) => {
                log::warn!("Keeping startup settings: {:#}", e);
                self.client
                    .log_message(
                        MessageType::WARNING,
                        format!("Failed to load workspace settings: {:#}", e),
                    )
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        #[allow(deprecated)]
        let root = params.root_uri.clone().or_else(|| {
            params
                .workspace_folders
                .as_ref()
                .and_then(|folders| folders.first())
                .map(|folder| folder.uri.clone())
        });
        if let Some(root) = root {
            self.adopt_workspace(&root).await;
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "java-precheck-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "java-precheck-ls initialized")
            .await;
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        Ok(())
    }

    async fn hover(&self, params: HoverParams) -> tower_lsp::jsonrpc::Result<Option<Hover>> {
        self.handle_hover(params).await
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> tower_lsp::jsonrpc::Result<Option<DocumentSymbolResponse>> {
        self.handle_document_symbol(params).await
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let doc_state = self.create_document_state(params.text_document.text).await;

        let mut docs = self.documents.lock().await;
        docs.insert(uri.clone(), doc_state);
        drop(docs); // Release the lock before calling publish_diagnostics

        self.publish_diagnostics(uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(change) = params.content_changes.into_iter().last() {
            let doc_state = self.create_document_state(change.text).await;

            let mut docs = self.documents.lock().await;
            docs.insert(uri.clone(), doc_state);
            drop(docs);

            self.publish_diagnostics(uri).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.lock().await.remove(&uri);

        // Clear stale markers in the editor
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }
}
