use anyhow::Result;
use java_precheck::lsp::server::serve;

#[tokio::main]
async fn main() -> Result<()> {
    serve().await
}
