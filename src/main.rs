// src/main.rs
mod config;
mod dtos;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod state;
mod store;

use std::io::ErrorKind;
use std::net::SocketAddr;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Catalog service stopped");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    fmt().with_env_filter(env_filter).init();
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let products = seed::load(config.seed_path.as_deref()).await?;
    tracing::info!(count = products.len(), "Seeded product catalog");
    tracing::debug!(?products, "Seed products");

    let app_state = state::AppState::new(store::ProductStore::new(products));
    let app = routes::create_router(app_state);

    let (listener, addr) = bind(&config).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

// Try port..port+range to avoid crash when address is in use
async fn bind(config: &AppConfig) -> Result<(TcpListener, SocketAddr), StartupError> {
    for offset in 0u16..=config.port_fallback_range {
        let port = config.port.saturating_add(offset);
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(l) => return Ok((l, addr)),
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
            }
            Err(e) => {
                tracing::warn!(%addr, kind=?e.kind(), error=%e, "Failed to bind, trying next");
            }
        }
    }
    Err(StartupError::Bind {
        host: config.host,
        first: config.port,
        last: config.port.saturating_add(config.port_fallback_range),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
