//! Government Document Portal - Binary Entry Point
//!
//! Builds the engines and document store once, then serves the REST API.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gov_docs::api::{create_router, AppState};
use gov_docs::compliance::ComplianceChecker;
use gov_docs::config::Config;
use gov_docs::search::SynonymEngine;
use gov_docs::service::PortalService;
use gov_docs::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = Arc::new(MemoryStore::from_file(&config.documents_path, config.persist)?);
    let synonyms = SynonymEngine::default();
    let compliance = ComplianceChecker::default();
    tracing::info!(
        synonym_groups = synonyms.groups().len(),
        legal_rules = compliance.rules().len(),
        "scoring engines ready"
    );

    let service = PortalService::new(synonyms, compliance, store);
    let app = create_router(Arc::new(AppState::new(service)));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} {} listening on {addr}", gov_docs::NAME, gov_docs::VERSION);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
