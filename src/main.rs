//! Scripture chat API
//!
//! A small HTTP service that answers questions about the Thirukkural and
//! the Bhagavad Gita through a generative model, keeping per-topic chat
//! history in process memory.

mod api;
mod history;
mod llm;
mod prompt;
mod topic;

use api::{create_router, AppState};
use llm::{GeminiService, LlmConfig, LlmService, LoggingService, DEFAULT_GEMINI_MODEL};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scripture_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("SCRIPTURE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let config = LlmConfig::from_env();
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set. Model requests will fail until it is configured.");
    }

    let service: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(
        GeminiService::new(config.gemini_api_key.unwrap_or_default(), &model),
    )));
    tracing::info!(model = %model, "Model client initialized");

    // Create application state
    let state = AppState::new(service);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Scripture chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
