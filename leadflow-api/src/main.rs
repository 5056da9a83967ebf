//! Leadflow Team Matcher API Server
//!
//! HTTP API that matches incoming sales leads to team members and hands the
//! result off to the notification pipeline.

mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use leadflow_matching::{MatcherService, OracleClient};
use leadflow_notify::NotifierClient;
use leadflow_store::LeadStoreClient;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<MatcherService>,
    pub store: Arc<LeadStoreClient>,
    pub notifier: Arc<NotifierClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,leadflow_api=debug")),
        )
        .init();

    info!("Starting Leadflow Team Matcher API");

    let database_url = std::env::var("DATABASE_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());
    let email_url = std::env::var("EMAIL_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:8004".to_string());

    // Initialize clients
    let store = Arc::new(LeadStoreClient::new(&database_url));
    let notifier = Arc::new(NotifierClient::new(&email_url));

    // async-openai reads OPENAI_API_KEY from env
    let oracle = Arc::new(OracleClient::new()?);

    // Initialize matcher service with injected clients
    let matcher = Arc::new(MatcherService::new(store.clone(), oracle));

    let state = AppState {
        matcher,
        store,
        notifier,
    };

    // Configure CORS for the intake frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Build router
    let app = Router::new()
        .merge(routes::api_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8003);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
