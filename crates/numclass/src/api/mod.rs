mod cli;
mod handlers;

pub use cli::ServeOptions;

use crate::facts::NumbersApi;
use crate::prelude::{eprintln, *};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Route serving number classifications
pub const CLASSIFY_ROUTE: &str = "/api/classify-number";

/// Request-independent state shared by every handler
#[derive(Debug)]
pub struct AppState {
    pub facts: NumbersApi,
}

/// Build the application router with permissive CORS
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CLASSIFY_ROUTE, get(handlers::classify_number))
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let facts = options.facts.client()?;

    let addr = format!("{}:{}", options.host, options.port);

    if global.debug {
        eprintln!("Starting numclass server on {}...", addr);
        eprintln!("Classify endpoint: http://{}{}", addr, CLASSIFY_ROUTE);
        eprintln!(
            "Fact provider: {} (timeout {}s)",
            facts.base_url(),
            options.facts.fact_timeout
        );
    }

    let app_router = router(Arc::new(AppState { facts }));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{}", addr);

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
