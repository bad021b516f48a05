//! HTTP front-end.
//!
//! Routes:
//! - `POST /api/holiday` runs the pipeline for a [`TripRequest`](crate::core::TripRequest)
//! - `GET /health` returns `ok`

mod error;
mod handlers;

pub use error::{ApiError, ApiErrorBody};
pub use handlers::HolidayResponse;

use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::errors::TripflowError;
use crate::pipeline::HolidayPipeline;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The pipeline every request runs.
    pub pipeline: HolidayPipeline,
}

impl AppState {
    /// Creates state around `pipeline`.
    pub const fn new(pipeline: HolidayPipeline) -> Self {
        Self { pipeline }
    }
}

/// Builds the application router.
pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .route("/api/holiday", post(handlers::plan_holiday))
        .route("/health", get(handlers::health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http());

    if cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Binds `config.bind` and serves until `shutdown` resolves.
pub async fn serve(
    config: &ServerConfig,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), TripflowError> {
    let app = router(state, config.cors);
    let listener = TcpListener::bind(&config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves once `signal` fires, logging why the server is stopping.
///
/// A signal listener that fails to install also resolves, so the error is
/// the last thing logged before shutdown.
pub async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down gracefully"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal, shutting down"),
    }
}
