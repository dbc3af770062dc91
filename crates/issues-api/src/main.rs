//! Issues API server binary.

use issues::storage::new_in_memory_store;
use issues_api::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=issues=debug,tower_http=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("issues=info,issues_api=info,tower_http=info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Starting issues-api");

    issues_api::serve(&config, new_in_memory_store()).await
}
