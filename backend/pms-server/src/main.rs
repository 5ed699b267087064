use pms_auth::{JwtValidator, TokenIssuer};
use pms_config::{Config, ConfigError};
use pms_server::error::Result as ServerErrorResult;
use pms_server::{AppState, build_router, logger, startup};

use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; report the outcome once logging is up
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level.filter(),
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pms-server v{}", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Failed to load .env: {}", e),
    }
    config.log_summary();

    let database_path = config.database_path()?;
    let database_name = database_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pms".to_string());

    // Build application state with a closed readiness gate
    let mut app_state = AppState::new(database_name);

    if config.auth.enabled {
        let Some(secret) = config.auth.jwt_secret.as_deref() else {
            return Err(ConfigError::auth("auth.jwt_secret is required when auth.enabled = true").into());
        };
        let ttl = Duration::from_secs(config.auth.token_ttl_secs);
        app_state = app_state.with_session_tokens(
            JwtValidator::with_hs256(secret.as_bytes()),
            TokenIssuer::with_hs256(secret.as_bytes(), ttl),
        );
        info!("Session tokens: HS256 enabled");
    } else {
        warn!("Session tokens DISABLED - list filters trust client-supplied userId/role");
    }

    // Store initialization runs alongside the listener
    let init_state = app_state.clone();
    let max_connections = config.database.max_connections;
    let admin = config.admin.clone();
    tokio::spawn(async move {
        if let Err(e) =
            startup::initialize_store(&init_state, &database_path, max_connections, &admin).await
        {
            error!("Store initialization failed, answering 503 until restart: {}", e);
        }
    });

    // Build router
    let app = build_router(app_state.clone());

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = app_state.try_pool() {
        pool.close().await;
        info!("Database pool closed");
    }
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
