use relay_server::{build_router, logger};
use relay_ws::{AppState, ConnectionConfig, ShutdownCoordinator};

use std::error::Error;
use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = relay_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting relay-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let shutdown = ShutdownCoordinator::new();

    let connection_config = ConnectionConfig {
        send_buffer_size: config.websocket.send_buffer_size,
    };
    let app_state = AppState::new(connection_config, shutdown.clone());

    let app = build_router(app_state);

    // Fails fast when the port is already bound
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {} (HTTP and WebSocket)", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut server_shutdown = shutdown.subscribe_guard();

    info!("Server ready to accept connections");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { server_shutdown.wait().await })
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
