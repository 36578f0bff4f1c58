use std::sync::Arc;

use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, openai_config::OpenAIConfig};
use openai::client::OpenAIClient;
use openai::completion_generator::CompletionGeneratorOpenAI;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// Layering:
/// - config/: Application configuration (server, CORS, OpenAI credentials)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration; a missing API key fails startup here,
    //    not inside the gateway.
    let config = AppConfig::from_env();
    let openai_config = OpenAIConfig::load()?;

    // 4. Probe upstream connectivity. Read endpoints work without the
    //    remote API, so a failed probe only warns.
    let probe_client = OpenAIClient::new(openai_config.api_key.clone());
    match openai::connection::list_models(&probe_client).await {
        Ok(models) => {
            tracing::info!("Connected to OpenAI API ({} models available)", models.len())
        }
        Err(err) => tracing::warn!("OpenAI connectivity check failed: {}", err),
    }

    // 5. Wire dependencies
    let generator = Arc::new(CompletionGeneratorOpenAI::new(OpenAIClient::new(
        openai_config.api_key,
    )));
    let container = DependencyContainer::new(generator);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
