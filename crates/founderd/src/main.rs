//! Founder Assistant daemon.
//!
//! Drafts startup business plans through an LLM backend, validates every
//! draft before it leaves the process, and serves the results over a local
//! HTTP API.

mod config;
mod routes;
mod server;

use anyhow::Result;
use founder_common::llm_client::HttpLlmClient;
use founder_common::PlanGenerator;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("founderd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::FounderConfig::load();

    // The LLM client uses blocking HTTP; build it off the async runtime.
    let llm_config = config.llm.clone();
    let llm = tokio::task::spawn_blocking(move || HttpLlmClient::new(llm_config)).await??;
    let generator = PlanGenerator::new(Arc::new(llm));

    let state = server::AppState::new(generator);
    server::run(state, &config.server.bind_addr).await
}
