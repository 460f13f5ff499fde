//! HTTP gateway that wraps coding problems in a prompt template and forwards
//! them to a generative model.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;

use std::sync::Arc;

use axum::Router;

pub use config::{AppConfig, ModelConfig};
pub use error::{ApiError, ConfigError, ModelError};
pub use model::{GeminiClient, GenerateContentResponse, GenerativeModel, ScriptedModel};

/// Handler state: the model client, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

/// Serves `app` until Ctrl-C, then drains in-flight requests.
pub async fn run_server(app: Router, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
