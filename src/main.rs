use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use projehub::config::{Config, DEFAULT_JWT_SECRET};
use projehub::db;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting projehub");

    if config.jwt.secret == DEFAULT_JWT_SECRET {
        tracing::warn!("PROJEHUB_JWT_SECRET is not set, using the development default");
    }

    let pool = db::connect(&config.database_url, &config.pool).await?;
    tracing::info!(
        max_connections = config.pool.max_connections,
        "Database connection established"
    );

    db::migrate(&pool).await?;
    tracing::info!("Migrations applied");

    if config.seed {
        if let Err(e) = db::seed::run(&pool).await {
            tracing::warn!("Failed to seed initial data: {e}");
        }
    }

    let addr = SocketAddr::new(config.host, config.port);
    let app = projehub::build_app(pool, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
