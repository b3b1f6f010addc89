pub mod guard;
pub mod handlers;
pub mod pages;
mod types;

pub use types::*;

use crate::{Result, config::Config};
use axum::{Router, middleware, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Builds the full application router, origin guard and CORS included.
pub fn build_router(config: &Config) -> Result<Router> {
    let cors = guard::build_cors_layer(&config.cors)?;
    let allowed = Arc::new(config.cors.clone());

    let app = Router::new()
        .route("/", get(handlers::banner))
        .route("/ping", get(handlers::ping))
        .route("/roll", get(handlers::roll))
        .route("/test", get(handlers::test_page))
        .layer(cors)
        .layer(middleware::from_fn_with_state(allowed, guard::origin_guard))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

pub async fn run(config: Config) -> Result<()> {
    let app = build_router(&config)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Dice API listening on {}", addr);
    info!("Allowed origin: {}", config.cors.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
