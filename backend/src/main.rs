//! AquaFarm irrigation planner - server binary

use std::net::SocketAddr;

use aquafarm_backend::{config, create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "aquafarm_server=debug,aquafarm_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AquaFarm Irrigation Planner Server");
    tracing::info!("Environment: {}", config.environment);

    if config.generation.api_key.trim().is_empty() {
        tracing::warn!("generation.api_key is not set; schedule generation will fail");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState::new(config)?;
    let app = create_app(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
