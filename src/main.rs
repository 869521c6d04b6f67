mod config;
mod correlation;
mod decision;
mod errors;
mod finance;
mod handlers;
mod models;
mod upstream;

use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_eligibility_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing upstream URLs are reported per request,
    // so this only fails on malformed values.
    let config = Config::from_env()?;
    let port = config.port;

    let state = Arc::new(AppState::from_config(config)?);

    let app = handlers::router(state)
        // Request size limit: 1MB max payload, applications are tiny
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Eligibility API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
