pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/diagnosis", post(handlers::diagnosis))
        .route("/api/federated-learning", post(handlers::federated_learning))
        .route("/api/tele-consultation", post(handlers::tele_consultation))
        .route("/api/login", post(handlers::login))
        .route("/api/check-in", post(handlers::check_in))
        .route("/api/abdm/link", post(handlers::link_health_id))
        .route("/api/features", get(handlers::features))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    info!(
        "Using {} model {} at {}",
        config.llm.provider, config.llm.model, config.llm.base_url
    );
    let llm = OpenAiClient::new(config.llm.clone())?;

    let app = router(AppState::new(Arc::new(llm)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
