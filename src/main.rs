use std::sync::Arc;

use prompt_gateway::{build_app, config, run_server, AppConfig, AppState, GeminiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    config::load_dotenv();
    let config = AppConfig::from_env()?;

    let model = GeminiClient::new(&config.model)?;
    tracing::info!(
        model = %config.model.model,
        endpoint = model.endpoint(),
        timeout_ms = config.model.timeout_ms,
        "model client ready"
    );

    let app = build_app(AppState::new(Arc::new(model)));
    run_server(app, &config.host, config.port).await?;
    Ok(())
}
