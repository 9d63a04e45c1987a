//! Brouhaha Role Authority - Main Entry Point

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use bh_server::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bh_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Brouhaha role authority"
    );

    // Role table is loaded once and shared read-only from here on
    let authority = config.load_authority()?;
    info!(
        table_version = authority.table().version(),
        source = config
            .role_table_path
            .as_ref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "Role table loaded"
    );

    let state = api::AppState::new(config.clone(), authority);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    };

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    info!("Server shutdown complete");

    Ok(())
}
