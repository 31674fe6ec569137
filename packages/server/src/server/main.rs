// Main entry point for API server

use std::sync::Arc;

use anthropic_client::AnthropicClient;
use anyhow::{Context, Result};
use server_core::{
    domains::advisor::AdvisorService,
    domains::directory::Dataset,
    domains::search::{LlmRelevanceProvider, RelevanceProvider},
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AI Safety Atlas API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the dataset (embedded, or from disk if overridden)
    let dataset = match &config.dataset_path {
        Some(path) => {
            tracing::info!(path, "Loading dataset from disk");
            Dataset::from_path(path)?
        }
        None => Dataset::load_embedded()?,
    };
    let stats = dataset.stats();
    tracing::info!(
        orgs = stats.orgs,
        projects = stats.projects,
        benchmarks = stats.benchmarks,
        problems = dataset.problems.len(),
        "Dataset loaded"
    );
    let dataset = Arc::new(dataset);

    // Create the LLM client and advisor service
    let client = AnthropicClient::new(config.anthropic_api_key.clone());
    let advisor = Arc::new(AdvisorService::new(
        dataset.clone(),
        client,
        config.anthropic_model.clone(),
    ));

    // Search relevance is delegated to the model in production; the local
    // scorer implements the same trait for offline use and tests.
    let relevance: Arc<dyn RelevanceProvider> =
        Arc::new(LlmRelevanceProvider::new(advisor.clone()));

    // Build application
    let app = build_app(
        AppState {
            dataset,
            advisor,
            relevance,
        },
        &config.allowed_origins,
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
