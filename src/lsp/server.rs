use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::lsp::backend::Backend;
use crate::config::{Args, Config, init_logging};

/// Environment switch used by integration tests to stop the server after a short delay
pub const TEST_EXIT_ENV: &str = "JAVA_PRECHECK_LS_TEST_EXIT";

/// Start the LSP server on stdio
pub async fn serve() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    let config = Config::from_args(args)?;

    match &config.settings_path {
        Some(path) => log::info!("Starting java-precheck-ls with {}", path.display()),
        None => log::info!("Starting java-precheck-ls with default settings"),
    }

    // Lets the integration test read stdout to EOF
    if std::env::var(TEST_EXIT_ENV).as_deref() == Ok("1") {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs(1));
            std::process::exit(0);
        });
    }

    let (service, socket) =
        LspService::build(move |client| Backend::new(client, config.clone())).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
