pub mod api; // HTTP surface
pub mod catalog;
pub mod config;
pub mod core_state; // Shared stores
pub mod models;
pub mod reporter; // Offline analytics
pub mod stats;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Serve the booking API until Ctrl-C.
pub async fn run(server_config: config::ServerConfig) -> Result<(), api::server::ServerError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let core = Arc::new(core_state::CoreState::with_fixtures());
    let server = api::server::start_server_on(core, server_config.socket_addr()).await?;
    tracing::info!(addr = %server.session.server_addr, "Accepting requests");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
    }

    server.stop().await;
    Ok(())
}
