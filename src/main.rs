//! SDG Chat Gateway server binary.
//!
//! Loads configuration from the environment, wires the adapters to the
//! orchestrator, and serves the chat API over HTTP.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sdg_chat_gateway::adapters::http::{chat_router, panic_response, ChatAppState};
use sdg_chat_gateway::adapters::{PageContextSource, RagflowClient, RagflowClientConfig};
use sdg_chat_gateway::application::ConversationOrchestrator;
use sdg_chat_gateway::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            process::exit(1);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {err}");
        process::exit(1);
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let completion = Arc::new(RagflowClient::new(RagflowClientConfig::from(
        &config.upstream,
    )));
    let context = Arc::new(PageContextSource::new(config.live_context.clone()));
    let orchestrator = Arc::new(ConversationOrchestrator::new(completion, context));

    let cors = cors_layer(&config);
    let app = chat_router()
        .with_state(ChatAppState { orchestrator })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    info!(%addr, "starting sdg-chat-gateway");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, %err, "failed to bind listener");
            process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "server exited with error");
        process::exit(1);
    }
}

/// Restricts CORS to the configured origins. Without an allow-list the
/// server stays permissive outside production (the widget may be embedded
/// on arbitrary pages) and serves same-origin only in production.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.server.allow_any_origin() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
