//! # herd-server
//!
//! axum HTTP surface over the Herd analytics evaluators.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /api/analytics/animal/{id}` | `AnimalAnalytics` |
//! | `GET /api/analytics/land/{id}` | `LandAnalytics` |
//! | `GET /api/analytics/farm/{id}` | `FarmAnalytics` |
//!
//! Unknown identifiers answer 404 and store failures 503, both with a
//! `{"error": "..."}` body.

pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use herd_config::ServerConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    Router::new()
        .route("/api/analytics/animal/{id}", get(routes::animal_analytics))
        .route("/api/analytics/land/{id}", get(routes::land_analytics))
        .route("/api/analytics/farm/{id}", get(routes::farm_analytics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, config: &ServerConfig) -> std::io::Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(%address, "herd server listening");

    axum::serve(listener, router(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("herd server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
