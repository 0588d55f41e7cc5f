use std::sync::Arc;

use axum::{Router, routing::get};
use log::info;
use sepep_server_app::Application;
use tower_http::cors::CorsLayer;

use crate::ServiceError;

mod action;
mod ladder;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    Router::new()
        .route("/api", get(action::read).post(action::write))
        .route("/api/ladder", get(ladder::standings))
        .route("/api/neighbourhoods", get(ladder::neighbourhoods))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(AppState { app })
}

async fn not_found() -> ServiceError {
    ServiceError::NotFound("No such endpoint".to_string())
}

pub async fn run(
    app: Arc<Application>,
    addr: &str,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}

#[derive(serde::Deserialize)]
pub struct DivisionQuery {
    pub division: Option<String>,
}
